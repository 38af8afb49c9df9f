//! Inbound UI events.

use crate::core::Event;
use crate::engine::Square;

/// Events the UI feeds to the machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEvent {
    /// Dispatched once at construction to leave `Off`.
    Start,
    /// A board square was clicked.
    Clicked(Square),
    /// Take back the last move.
    Undo,
    /// The one-shot timer fired.
    Tick,
    /// The clock display was clicked (pause/resume toggle).
    ClockClicked,
}

/// Payload-free projection of [`GameEvent`] for the transition table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEventKind {
    Start,
    Clicked,
    Undo,
    Tick,
    ClockClicked,
}

impl Event for GameEvent {
    type Kind = GameEventKind;

    fn kind(&self) -> GameEventKind {
        match self {
            Self::Start => GameEventKind::Start,
            Self::Clicked(_) => GameEventKind::Clicked,
            Self::Undo => GameEventKind::Undo,
            Self::Tick => GameEventKind::Tick,
            Self::ClockClicked => GameEventKind::ClockClicked,
        }
    }
}

impl GameEvent {
    /// The clicked square, when this is a click.
    pub fn square(&self) -> Option<Square> {
        match self {
            Self::Clicked(square) => Some(*square),
            _ => None,
        }
    }
}
