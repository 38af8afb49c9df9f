//! Guard predicates for the game's transition table.
//!
//! Guards that probe the engine go through [`probe`], which rolls the probe
//! move back before returning: several guards can run back-to-back against
//! the same engine instance while one click is evaluated, so none of them
//! may leave a trace.

use super::context::{initial_white_squares, GameContext};
use super::event::GameEvent;
use crate::engine::{probe, ChessEngine, Promotion};

/// The clicked square holds one of white's pieces.
pub fn is_white_piece_clicked<En: ChessEngine>(
    context: &GameContext,
    event: &GameEvent,
    _engine: &mut En,
) -> bool {
    event
        .square()
        .is_some_and(|square| context.white_pieces.contains(&square))
}

/// The clicked square holds one of black's pieces.
pub fn is_black_piece_clicked<En: ChessEngine>(
    context: &GameContext,
    event: &GameEvent,
    _engine: &mut En,
) -> bool {
    event
        .square()
        .is_some_and(|square| context.black_pieces.contains(&square))
}

fn probed_win<En: ChessEngine>(
    context: &GameContext,
    event: &GameEvent,
    engine: &mut En,
) -> Option<bool> {
    let from = context.piece_square?;
    let to = event.square()?;
    // Always promote to a queen; under-promotion is not modeled.
    probe(engine, from, to, Promotion::Queen, |engine| {
        engine.game_over()
    })
}

/// Moving the selected piece to the clicked square is legal and does not
/// end the game.
pub fn is_legal_non_winning_move<En: ChessEngine>(
    context: &GameContext,
    event: &GameEvent,
    engine: &mut En,
) -> bool {
    probed_win(context, event, engine) == Some(false)
}

/// Moving the selected piece to the clicked square is legal and ends the
/// game.
pub fn is_legal_winning_move<En: ChessEngine>(
    context: &GameContext,
    event: &GameEvent,
    engine: &mut En,
) -> bool {
    probed_win(context, event, engine) == Some(true)
}

/// At least one move has been played: white's pieces have left their
/// initial configuration. Gates undo so the engine is never asked to take
/// back a move that does not exist.
pub fn is_move_history_not_empty<En: ChessEngine>(
    context: &GameContext,
    _event: &GameEvent,
    _engine: &mut En,
) -> bool {
    !initial_white_squares()
        .iter()
        .all(|square| context.white_pieces.contains(square))
}
