//! Commands emitted by actions for the host to interpret.

use super::context::{BoardStyle, SquareStyles, Turn};
use crate::engine::Square;
use serde::Serialize;
use std::time::Duration;

/// Interval between clock ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Partial render parameters. The host merges these into its retained
/// render-prop set; absent fields keep their current value.
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draggable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_style: Option<BoardStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub square_styles: Option<SquareStyles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn: Option<Turn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_paused: Option<bool>,
    /// Hint that this render follows a take-back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub undo: Option<bool>,
}

/// Instructions to the host's effect handlers. Commands in one action
/// output are executed in emission order.
#[derive(Clone, PartialEq, Debug)]
pub enum Command {
    /// Merge the patch into the render props and re-render.
    Render(RenderPatch),
    /// Apply this move to the authoritative engine instance.
    MovePiece { from: Square, to: Square },
    /// Take back the last move on the authoritative engine instance.
    UndoMove,
    /// Arm the one-shot timer; it injects `TICK` when it fires.
    SetTimer(Duration),
    /// Cancel any pending timer.
    CancelTimer,
}
