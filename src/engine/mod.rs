//! The chess engine boundary.
//!
//! The machine consumes move legality, undo, FEN serialization and the
//! textual board dump as an opaque capability behind [`ChessEngine`]. The
//! adapter over the `chess` crate lives in [`BoardEngine`]; tests and hosts
//! may substitute their own implementation.

mod board;
mod square;

pub use board::BoardEngine;
pub use square::{ParseSquareError, Square};

/// Piece a pawn is promoted to. The game machine always requests a queen;
/// under-promotion is not modeled.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Promotion {
    Queen,
    Rook,
    Bishop,
    Knight,
}

/// A move as the engine records it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
}

/// Capability interface to the chess rule engine.
///
/// Implementations must make `try_move` and `undo` exactly reversible:
/// a successful `try_move` followed by `undo` restores the engine to the
/// state `fen` reported before the move.
pub trait ChessEngine {
    /// Attempt a move; `None` if it is illegal in the current position.
    /// A legal move is applied to the engine.
    fn try_move(&mut self, from: Square, to: Square, promotion: Promotion) -> Option<MoveRecord>;

    /// Take back the most recent move, if any, returning it.
    fn undo(&mut self) -> Option<MoveRecord>;

    /// The current position in Forsyth-Edwards Notation.
    fn fen(&self) -> String;

    /// Whether the game has ended in the current position.
    fn game_over(&self) -> bool;

    /// Textual board dump: one bordered row per rank from 8 down to 1,
    /// uppercase for white pieces and lowercase for black.
    fn ascii(&self) -> String;
}

/// Scoped probe: apply a move, inspect the resulting position, then roll
/// the move back before returning.
///
/// Guards and probing actions go through this helper so the rollback holds
/// on every path; the engine's `fen` is the same before and after the call.
/// Returns `None` (with nothing applied) when the move is illegal.
pub fn probe<E, T>(
    engine: &mut E,
    from: Square,
    to: Square,
    promotion: Promotion,
    inspect: impl FnOnce(&E) -> T,
) -> Option<T>
where
    E: ChessEngine + ?Sized,
{
    engine.try_move(from, to, promotion)?;
    let seen = inspect(engine);
    engine.undo();
    Some(seen)
}
