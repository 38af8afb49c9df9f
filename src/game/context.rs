//! The game's extended state and its typed patches.

use crate::core::ExtendedState;
use crate::engine::Square;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Standard initial position.
pub const INITIAL_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Default board width, in pixels, handed to the renderer.
pub const BOARD_WIDTH: u32 = 200;

/// Whose move it is.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Turn {
    White,
    Black,
}

impl Turn {
    /// The other side.
    pub fn flipped(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

/// Visual styling of the board frame.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardStyle {
    pub border_radius: String,
    pub box_shadow: String,
}

impl Default for BoardStyle {
    fn default() -> Self {
        Self {
            border_radius: "5px".to_string(),
            box_shadow: "0 5px 15px rgba(0, 0, 0, 0.5)".to_string(),
        }
    }
}

/// Visual styling of a single square.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquareStyle {
    pub background_color: String,
}

/// Per-square style overrides keyed by square.
pub type SquareStyles = BTreeMap<Square, SquareStyle>;

/// The extended state record. Owned by the machine; actions read it and
/// return [`ContextPatch`] lists, never mutate it directly.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GameContext {
    pub draggable: bool,
    pub width: u32,
    /// Current position as the engine's FEN string.
    pub position: String,
    pub white_pieces: Vec<Square>,
    pub black_pieces: Vec<Square>,
    /// Square of the currently selected piece. Non-empty only while a
    /// piece-selected sub-state is active.
    pub piece_square: Option<Square>,
    pub board_style: BoardStyle,
    pub square_styles: SquareStyles,
    pub status: String,
    pub turn: Turn,
    /// Elapsed game time in seconds.
    pub game_duration: u32,
    pub is_paused: bool,
}

impl GameContext {
    pub fn new() -> Self {
        Self {
            draggable: false,
            width: BOARD_WIDTH,
            position: INITIAL_FEN.to_string(),
            white_pieces: initial_white_squares(),
            black_pieces: initial_black_squares(),
            piece_square: None,
            board_style: BoardStyle::default(),
            square_styles: SquareStyles::new(),
            status: String::new(),
            turn: Turn::White,
            game_duration: 0,
            is_paused: false,
        }
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Field-level setter for [`GameContext`]. Patches in an action's update
/// list apply in order; later patches overwrite earlier ones.
#[derive(Clone, PartialEq, Debug)]
pub enum ContextPatch {
    PieceSquare(Option<Square>),
    Position(String),
    SquareStyles(SquareStyles),
    WhitePieces(Vec<Square>),
    BlackPieces(Vec<Square>),
    Turn(Turn),
    Status(String),
    GameDuration(u32),
    IsPaused(bool),
}

impl ExtendedState for GameContext {
    type Patch = ContextPatch;

    fn apply(&mut self, patch: ContextPatch) {
        match patch {
            ContextPatch::PieceSquare(square) => self.piece_square = square,
            ContextPatch::Position(position) => self.position = position,
            ContextPatch::SquareStyles(styles) => self.square_styles = styles,
            ContextPatch::WhitePieces(squares) => self.white_pieces = squares,
            ContextPatch::BlackPieces(squares) => self.black_pieces = squares,
            ContextPatch::Turn(turn) => self.turn = turn,
            ContextPatch::Status(status) => self.status = status,
            ContextPatch::GameDuration(seconds) => self.game_duration = seconds,
            ContextPatch::IsPaused(paused) => self.is_paused = paused,
        }
    }
}

fn rank_squares(ranks: [u8; 2]) -> Vec<Square> {
    ranks
        .iter()
        .flat_map(|&rank| (0..8).filter_map(move |file| Square::new(file, rank)))
        .collect()
}

/// Squares the white pieces occupy before the first move (ranks 1 and 2).
pub fn initial_white_squares() -> Vec<Square> {
    rank_squares([0, 1])
}

/// Squares the black pieces occupy before the first move (ranks 7 and 8).
pub fn initial_black_squares() -> Vec<Square> {
    rank_squares([6, 7])
}
