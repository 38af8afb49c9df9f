//! The chess game machine definition.
//!
//! This module is the machine the interpreter runs: the control-state
//! hierarchy, the extended state, the guards, the actions, and the command
//! set the host interprets. The chess rules themselves live behind the
//! [`crate::engine::ChessEngine`] boundary; everything here treats them as
//! an opaque capability.

pub mod actions;
mod command;
mod context;
mod definition;
mod event;
pub mod guards;
mod state;
mod styles;

pub use command::{Command, RenderPatch, TICK_INTERVAL};
pub use context::{
    initial_black_squares, initial_white_squares, BoardStyle, ContextPatch, GameContext,
    SquareStyle, SquareStyles, Turn, BOARD_WIDTH, INITIAL_FEN,
};
pub use definition::{game_machine, ChessMachine};
pub use event::{GameEvent, GameEventKind};
pub use state::GameState;
pub use styles::selected_square_styles;
