//! Render effect handler and the retained render-prop set.

use crate::game::{
    BoardStyle, RenderPatch, SquareStyles, Turn, BOARD_WIDTH, INITIAL_FEN,
};
use serde::Serialize;

/// The full render-parameter set the host retains. `RENDER` commands carry
/// partial patches; the shell merges them here before re-rendering.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderProps {
    pub draggable: bool,
    pub width: u32,
    pub position: String,
    pub board_style: BoardStyle,
    pub square_styles: SquareStyles,
    pub turn: Turn,
    pub status: String,
    pub game_duration: u32,
    pub is_paused: bool,
    /// True only for the render that follows a take-back.
    pub undo: bool,
}

impl Default for RenderProps {
    fn default() -> Self {
        Self {
            draggable: false,
            width: BOARD_WIDTH,
            position: INITIAL_FEN.to_string(),
            board_style: BoardStyle::default(),
            square_styles: SquareStyles::new(),
            turn: Turn::White,
            status: String::new(),
            game_duration: 0,
            is_paused: false,
            undo: false,
        }
    }
}

impl RenderProps {
    /// Shallow-merge a patch: present fields replace, absent fields keep
    /// their current value. The undo hint is per-render, not retained.
    pub fn merge(&mut self, patch: &RenderPatch) {
        if let Some(draggable) = patch.draggable {
            self.draggable = draggable;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(position) = &patch.position {
            self.position = position.clone();
        }
        if let Some(board_style) = &patch.board_style {
            self.board_style = board_style.clone();
        }
        if let Some(square_styles) = &patch.square_styles {
            self.square_styles = square_styles.clone();
        }
        if let Some(turn) = patch.turn {
            self.turn = turn;
        }
        if let Some(status) = &patch.status {
            self.status = status.clone();
        }
        if let Some(game_duration) = patch.game_duration {
            self.game_duration = game_duration;
        }
        if let Some(is_paused) = patch.is_paused {
            self.is_paused = is_paused;
        }
        self.undo = patch.undo.unwrap_or(false);
    }
}

/// Render effect handler. Receives the merged prop set on every `RENDER`.
pub trait Renderer {
    fn render(&mut self, props: &RenderProps);
}

/// Renderer that logs each frame's props as one JSON line.
#[derive(Debug, Default)]
pub struct TraceRenderer;

impl Renderer for TraceRenderer {
    fn render(&mut self, props: &RenderProps) {
        match serde_json::to_string(props) {
            Ok(json) => tracing::info!(target: "gambit::render", %json, "render"),
            Err(error) => tracing::warn!(%error, "render props failed to serialize"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_replaces_present_fields_only() {
        let mut props = RenderProps::default();

        props.merge(&RenderPatch {
            game_duration: Some(42),
            status: Some("check".to_string()),
            ..RenderPatch::default()
        });

        assert_eq!(props.game_duration, 42);
        assert_eq!(props.status, "check");
        // Absent fields keep their values.
        assert_eq!(props.position, INITIAL_FEN);
        assert_eq!(props.turn, Turn::White);
    }

    #[test]
    fn undo_hint_is_not_retained() {
        let mut props = RenderProps::default();

        props.merge(&RenderPatch {
            undo: Some(true),
            ..RenderPatch::default()
        });
        assert!(props.undo);

        props.merge(&RenderPatch {
            game_duration: Some(1),
            ..RenderPatch::default()
        });
        assert!(!props.undo);
    }

    #[test]
    fn props_serialize_with_camel_case_keys() {
        let props = RenderProps::default();
        let json = serde_json::to_string(&props).unwrap();

        assert!(json.contains("\"gameDuration\":0"));
        assert!(json.contains("\"isPaused\":false"));
        assert!(json.contains("\"boardStyle\""));
    }
}
