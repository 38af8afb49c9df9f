//! Adapter over the `chess` crate.

use super::{ChessEngine, MoveRecord, Promotion, Square};
use chess::{Board, BoardStatus, Color, MoveGen, Piece};

/// Rule engine backed by `chess::Board`, with an explicit undo stack.
///
/// `chess::Board` is a value type with no move history of its own, so the
/// adapter keeps the boards it has passed through; `undo` pops the stack.
pub struct BoardEngine {
    current: Board,
    undo_stack: Vec<(Board, MoveRecord)>,
}

impl BoardEngine {
    /// Engine at the standard initial position.
    pub fn new() -> Self {
        Self {
            current: Board::default(),
            undo_stack: Vec::new(),
        }
    }

    /// Number of moves that can be taken back.
    pub fn ply(&self) -> usize {
        self.undo_stack.len()
    }

    /// Legal moves in the current position, as from/to records. Promotion
    /// candidates other than the queen are dropped, since the queen is the
    /// only promotion the machine ever requests.
    pub fn legal_moves(&self) -> Vec<MoveRecord> {
        MoveGen::new_legal(&self.current)
            .filter(|m| m.get_promotion().map_or(true, |p| p == Piece::Queen))
            .map(|m| MoveRecord {
                from: board_square(m.get_source()),
                to: board_square(m.get_dest()),
            })
            .collect()
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn engine_square(square: Square) -> chess::Square {
    chess::Square::make_square(
        chess::Rank::from_index(square.rank() as usize),
        chess::File::from_index(square.file() as usize),
    )
}

fn board_square(square: chess::Square) -> Square {
    Square::new(
        square.get_file().to_index() as u8,
        square.get_rank().to_index() as u8,
    )
    .expect("engine squares are on the board")
}

fn promotion_piece(promotion: Promotion) -> Piece {
    match promotion {
        Promotion::Queen => Piece::Queen,
        Promotion::Rook => Piece::Rook,
        Promotion::Bishop => Piece::Bishop,
        Promotion::Knight => Piece::Knight,
    }
}

fn piece_letter(piece: Piece) -> char {
    match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    }
}

impl ChessEngine for BoardEngine {
    fn try_move(&mut self, from: Square, to: Square, promotion: Promotion) -> Option<MoveRecord> {
        let source = engine_square(from);
        let dest = engine_square(to);
        let wanted = promotion_piece(promotion);

        // Promotion positions generate one candidate per piece; match the
        // requested one. Plain moves carry no promotion and match as-is.
        let candidate = MoveGen::new_legal(&self.current).find(|m| {
            m.get_source() == source
                && m.get_dest() == dest
                && m.get_promotion().map_or(true, |p| p == wanted)
        })?;

        let record = MoveRecord { from, to };
        self.undo_stack.push((self.current.clone(), record));
        self.current = self.current.make_move_new(candidate);
        Some(record)
    }

    fn undo(&mut self) -> Option<MoveRecord> {
        let (previous, record) = self.undo_stack.pop()?;
        self.current = previous;
        Some(record)
    }

    fn fen(&self) -> String {
        self.current.to_string()
    }

    fn game_over(&self) -> bool {
        self.current.status() != BoardStatus::Ongoing
    }

    fn ascii(&self) -> String {
        let mut out = String::from("   +------------------------+\n");
        for rank in (0..8usize).rev() {
            out.push_str(&format!(" {} |", rank + 1));
            for file in 0..8usize {
                let square = chess::Square::make_square(
                    chess::Rank::from_index(rank),
                    chess::File::from_index(file),
                );
                let cell = match self.current.piece_on(square) {
                    Some(piece) => {
                        let letter = piece_letter(piece);
                        if self.current.color_on(square) == Some(Color::White) {
                            letter.to_ascii_uppercase()
                        } else {
                            letter
                        }
                    }
                    None => '.',
                };
                out.push(' ');
                out.push(cell);
                out.push(' ');
            }
            out.push_str("|\n");
        }
        out.push_str("   +------------------------+\n");
        out.push_str("     a  b  c  d  e  f  g  h\n");
        out
    }
}
