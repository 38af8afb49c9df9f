//! Action functions for the game's transition table.
//!
//! Every action returns its state patches and output commands; the machine
//! applies the patches and the host interprets the commands. Actions that
//! probe the engine roll the probe back before returning - the engine is
//! only mutated durably by the host, through `MOVE_PIECE` and `UNDO_MOVE`.

use super::command::{Command, RenderPatch, TICK_INTERVAL};
use super::context::{ContextPatch, GameContext, SquareStyles, Turn};
use super::event::GameEvent;
use super::styles::selected_square_styles;
use crate::engine::{probe, ChessEngine, MoveRecord, Promotion, Square};
use crate::machine::ActionOutput;
use tracing::warn;

/// Output type of every game action.
pub type GameOutput = ActionOutput<ContextPatch, Command>;

fn board_render(context: &GameContext) -> RenderPatch {
    RenderPatch {
        draggable: Some(context.draggable),
        width: Some(context.width),
        position: Some(context.position.clone()),
        board_style: Some(context.board_style.clone()),
        square_styles: Some(context.square_styles.clone()),
        turn: Some(context.turn),
        status: Some(context.status.clone()),
        ..RenderPatch::default()
    }
}

/// Render the full initial screen, clock included. No state change.
pub fn display_init_screen<En: ChessEngine>(
    context: &GameContext,
    _event: &GameEvent,
    _engine: &mut En,
) -> GameOutput {
    GameOutput {
        updates: Vec::new(),
        outputs: vec![Command::Render(RenderPatch {
            game_duration: Some(context.game_duration),
            ..board_render(context)
        })],
    }
}

/// Remember the clicked square as the selection and highlight it. Shared
/// by both colors; the guards have already established whose piece it is.
pub fn highlight_selected_piece<En: ChessEngine>(
    context: &GameContext,
    event: &GameEvent,
    _engine: &mut En,
) -> GameOutput {
    let Some(square) = event.square() else {
        return GameOutput::none();
    };
    let square_styles = selected_square_styles(square);

    GameOutput {
        updates: vec![
            ContextPatch::SquareStyles(square_styles.clone()),
            ContextPatch::PieceSquare(Some(square)),
        ],
        outputs: vec![Command::Render(RenderPatch {
            square_styles: Some(square_styles),
            ..board_render(context)
        })],
    }
}

fn move_piece<En: ChessEngine>(
    mover: Turn,
    context: &GameContext,
    event: &GameEvent,
    engine: &mut En,
) -> GameOutput {
    let Some(to) = event.square() else {
        return GameOutput::none();
    };
    let Some(from) = context.piece_square else {
        return GameOutput::none();
    };

    let (own, other) = match mover {
        Turn::White => (&context.white_pieces, &context.black_pieces),
        Turn::Black => (&context.black_pieces, &context.white_pieces),
    };
    // The mover's piece leaves `from` for `to`; any opposing piece on `to`
    // is captured and leaves its list, keeping the two lists disjoint.
    let own: Vec<Square> = own
        .iter()
        .copied()
        .filter(|square| *square != from)
        .chain(std::iter::once(to))
        .collect();
    let other: Vec<Square> = other.iter().copied().filter(|square| *square != to).collect();
    let (white_pieces, black_pieces) = match mover {
        Turn::White => (own, other),
        Turn::Black => (other, own),
    };

    // Probe the engine for the resulting FEN and roll back. The board the
    // machine tracks lives in the context; the host applies the move
    // durably when it executes MOVE_PIECE.
    let Some(position) = probe(engine, from, to, Promotion::Queen, |engine| engine.fen()) else {
        return GameOutput::none();
    };

    let turn = mover.flipped();
    let square_styles = SquareStyles::new();

    GameOutput {
        updates: vec![
            ContextPatch::PieceSquare(None),
            ContextPatch::Position(position.clone()),
            ContextPatch::SquareStyles(square_styles.clone()),
            ContextPatch::WhitePieces(white_pieces),
            ContextPatch::BlackPieces(black_pieces),
            ContextPatch::Turn(turn),
        ],
        outputs: vec![
            Command::Render(RenderPatch {
                position: Some(position),
                square_styles: Some(square_styles),
                turn: Some(turn),
                ..board_render(context)
            }),
            Command::MovePiece { from, to },
        ],
    }
}

/// Commit white's selected move: update both piece lists, clear the
/// selection, flip the turn, and hand the move to the host.
pub fn move_white_piece<En: ChessEngine>(
    context: &GameContext,
    event: &GameEvent,
    engine: &mut En,
) -> GameOutput {
    move_piece(Turn::White, context, event, engine)
}

/// Black's counterpart of [`move_white_piece`].
pub fn move_black_piece<En: ChessEngine>(
    context: &GameContext,
    event: &GameEvent,
    engine: &mut En,
) -> GameOutput {
    move_piece(Turn::Black, context, event, engine)
}

fn end_game<En: ChessEngine>(
    mover: Turn,
    context: &GameContext,
    event: &GameEvent,
    engine: &mut En,
) -> GameOutput {
    let GameOutput {
        mut updates,
        mut outputs,
    } = move_piece(mover, context, event, engine);

    // The winner is whoever held the turn before the move landed.
    let status = match context.turn {
        Turn::White => "White wins!",
        Turn::Black => "Black wins!",
    };
    updates.push(ContextPatch::Status(status.to_string()));
    for command in &mut outputs {
        if let Command::Render(patch) = command {
            patch.status = Some(status.to_string());
        }
    }

    GameOutput { updates, outputs }
}

/// White's winning move: commit it, then announce the result.
pub fn end_white_game<En: ChessEngine>(
    context: &GameContext,
    event: &GameEvent,
    engine: &mut En,
) -> GameOutput {
    end_game(Turn::White, context, event, engine)
}

/// Black's counterpart of [`end_white_game`].
pub fn end_black_game<En: ChessEngine>(
    context: &GameContext,
    event: &GameEvent,
    engine: &mut En,
) -> GameOutput {
    end_game(Turn::Black, context, event, engine)
}

/// Rebuild both piece-position lists from the engine's board dump.
///
/// The lists are derived state and can drift from engine truth after a
/// take-back, so undo reconstructs them from the engine's canonical board
/// representation instead of patching them incrementally.
pub fn piece_lists_from_ascii(dump: &str) -> (Vec<Square>, Vec<Square>) {
    let mut white_pieces = Vec::new();
    let mut black_pieces = Vec::new();

    // Skip the top border; the next eight lines are ranks 8 down to 1.
    for (row, line) in dump.lines().skip(1).take(8).enumerate() {
        let rank = 7 - row as u8;
        let cells = line.chars().filter(|c| !c.is_whitespace()).skip(2).take(8);
        for (file, cell) in cells.enumerate() {
            let Some(square) = Square::new(file as u8, rank) else {
                continue;
            };
            if cell.is_ascii_uppercase() {
                white_pieces.push(square);
            } else if cell.is_ascii_lowercase() {
                black_pieces.push(square);
            }
        }
    }

    (white_pieces, black_pieces)
}

/// Take back the last move.
///
/// Pops the engine's last move to read the prior FEN and board dump, then
/// replays it so the engine keeps matching the host-authoritative state
/// until the host executes `UNDO_MOVE`.
pub fn undo_move<En: ChessEngine>(
    context: &GameContext,
    _event: &GameEvent,
    engine: &mut En,
) -> GameOutput {
    // The move-history guard keeps this from running on an empty game.
    let Some(MoveRecord { from, to }) = engine.undo() else {
        return GameOutput::none();
    };
    let position = engine.fen();
    let (white_pieces, black_pieces) = piece_lists_from_ascii(&engine.ascii());
    if engine.try_move(from, to, Promotion::Queen).is_none() {
        warn!(%from, %to, "failed to replay the undone move on the probe engine");
    }

    let turn = context.turn.flipped();

    GameOutput {
        updates: vec![
            ContextPatch::WhitePieces(white_pieces),
            ContextPatch::BlackPieces(black_pieces),
            ContextPatch::Position(position.clone()),
            ContextPatch::SquareStyles(SquareStyles::new()),
            ContextPatch::PieceSquare(None),
            ContextPatch::Status(String::new()),
            ContextPatch::Turn(turn),
        ],
        outputs: vec![
            Command::UndoMove,
            Command::Render(RenderPatch {
                draggable: Some(context.draggable),
                width: Some(context.width),
                position: Some(position),
                board_style: Some(context.board_style.clone()),
                square_styles: Some(SquareStyles::new()),
                turn: Some(turn),
                status: Some(String::new()),
                undo: Some(true),
                ..RenderPatch::default()
            }),
        ],
    }
}

/// Arm the first clock tick.
pub fn reset_and_start_timer<En: ChessEngine>(
    _context: &GameContext,
    _event: &GameEvent,
    _engine: &mut En,
) -> GameOutput {
    GameOutput {
        updates: Vec::new(),
        outputs: vec![Command::SetTimer(TICK_INTERVAL)],
    }
}

/// One clock tick: bump the elapsed time, show it, re-arm the timer.
pub fn update_and_display_clock<En: ChessEngine>(
    context: &GameContext,
    _event: &GameEvent,
    _engine: &mut En,
) -> GameOutput {
    let game_duration = context.game_duration + 1;

    GameOutput {
        updates: vec![ContextPatch::GameDuration(game_duration)],
        outputs: vec![
            Command::Render(RenderPatch {
                game_duration: Some(game_duration),
                ..RenderPatch::default()
            }),
            Command::SetTimer(TICK_INTERVAL),
        ],
    }
}

/// Pause the clock. The pending timer must be cancelled so no stray tick
/// fires while paused.
pub fn pause_clock<En: ChessEngine>(
    _context: &GameContext,
    _event: &GameEvent,
    _engine: &mut En,
) -> GameOutput {
    GameOutput {
        updates: vec![ContextPatch::IsPaused(true)],
        outputs: vec![
            Command::Render(RenderPatch {
                is_paused: Some(true),
                ..RenderPatch::default()
            }),
            Command::CancelTimer,
        ],
    }
}

/// Resume the clock and re-arm the timer.
pub fn resume_clock<En: ChessEngine>(
    _context: &GameContext,
    _event: &GameEvent,
    _engine: &mut En,
) -> GameOutput {
    GameOutput {
        updates: vec![ContextPatch::IsPaused(false)],
        outputs: vec![
            Command::Render(RenderPatch {
                is_paused: Some(false),
                ..RenderPatch::default()
            }),
            Command::SetTimer(TICK_INTERVAL),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ExtendedState;
    use crate::engine::BoardEngine;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn clicked(name: &str) -> GameEvent {
        GameEvent::Clicked(sq(name))
    }

    #[test]
    fn display_init_screen_renders_without_updates() {
        let context = GameContext::new();
        let mut engine = BoardEngine::new();

        let output = display_init_screen(&context, &GameEvent::Start, &mut engine);

        assert!(output.updates.is_empty());
        assert_eq!(output.outputs.len(), 1);
        let Command::Render(patch) = &output.outputs[0] else {
            panic!("expected a render command");
        };
        assert_eq!(patch.position.as_deref(), Some(context.position.as_str()));
        assert_eq!(patch.game_duration, Some(0));
    }

    #[test]
    fn highlight_remembers_and_styles_the_selection() {
        let context = GameContext::new();
        let mut engine = BoardEngine::new();

        let output = highlight_selected_piece(&context, &clicked("e2"), &mut engine);

        let mut updated = context.clone();
        updated.apply_all(output.updates);
        assert_eq!(updated.piece_square, Some(sq("e2")));
        assert!(updated.square_styles.contains_key(&sq("e2")));
        // Selection touches nothing else.
        assert_eq!(updated.turn, context.turn);
        assert_eq!(updated.white_pieces, context.white_pieces);
    }

    #[test]
    fn move_white_piece_updates_lists_and_flips_turn() {
        let mut context = GameContext::new();
        context.piece_square = Some(sq("e2"));
        let mut engine = BoardEngine::new();
        let fen_before = engine.fen();

        let output = move_white_piece(&context, &clicked("e4"), &mut engine);

        // The probe rolled back; only MOVE_PIECE commits it.
        assert_eq!(engine.fen(), fen_before);
        assert!(output
            .outputs
            .iter()
            .any(|c| *c == Command::MovePiece { from: sq("e2"), to: sq("e4") }));

        let mut updated = context.clone();
        updated.apply_all(output.updates);
        assert_eq!(updated.turn, Turn::Black);
        assert_eq!(updated.piece_square, None);
        assert!(!updated.white_pieces.contains(&sq("e2")));
        assert!(updated.white_pieces.contains(&sq("e4")));
        assert!(updated.position.starts_with("rnbqkbnr/pppppppp/8/8/4P3/"));
    }

    #[test]
    fn capture_removes_the_opposing_entry() {
        // 1. e4 d5: white to capture on d5.
        let mut engine = BoardEngine::new();
        engine.try_move(sq("e2"), sq("e4"), Promotion::Queen);
        engine.try_move(sq("d7"), sq("d5"), Promotion::Queen);

        let mut context = GameContext::new();
        context.apply_all([
            ContextPatch::WhitePieces(
                context
                    .white_pieces
                    .iter()
                    .copied()
                    .map(|s| if s == sq("e2") { sq("e4") } else { s })
                    .collect(),
            ),
            ContextPatch::BlackPieces(
                context
                    .black_pieces
                    .iter()
                    .copied()
                    .map(|s| if s == sq("d7") { sq("d5") } else { s })
                    .collect(),
            ),
            ContextPatch::PieceSquare(Some(sq("e4"))),
        ]);

        let output = move_piece(Turn::White, &context, &clicked("d5"), &mut engine);

        let mut updated = context.clone();
        updated.apply_all(output.updates);
        assert!(updated.white_pieces.contains(&sq("d5")));
        assert!(!updated.black_pieces.contains(&sq("d5")));
        let total = updated.white_pieces.len() + updated.black_pieces.len();
        assert_eq!(total, 31);
    }

    #[test]
    fn illegal_move_produces_nothing() {
        let mut context = GameContext::new();
        context.piece_square = Some(sq("e2"));
        let mut engine = BoardEngine::new();

        let output = move_white_piece(&context, &clicked("e5"), &mut engine);

        assert!(output.updates.is_empty());
        assert!(output.outputs.is_empty());
    }

    #[test]
    fn end_game_announces_the_mover_as_winner() {
        let mut engine = BoardEngine::new();
        for (from, to) in [
            ("e2", "e4"),
            ("e7", "e5"),
            ("d1", "h5"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("g8", "f6"),
        ] {
            engine.try_move(sq(from), sq(to), Promotion::Queen);
        }
        let (white_pieces, black_pieces) = piece_lists_from_ascii(&engine.ascii());
        let mut context = GameContext::new();
        context.apply_all([
            ContextPatch::WhitePieces(white_pieces),
            ContextPatch::BlackPieces(black_pieces),
            ContextPatch::PieceSquare(Some(sq("h5"))),
        ]);

        let output = end_white_game(&context, &clicked("f7"), &mut engine);

        let mut updated = context.clone();
        updated.apply_all(output.updates);
        assert_eq!(updated.status, "White wins!");

        let Command::Render(patch) = &output.outputs[0] else {
            panic!("expected a render command first");
        };
        assert_eq!(patch.status.as_deref(), Some("White wins!"));
        assert!(matches!(output.outputs[1], Command::MovePiece { .. }));
    }

    #[test]
    fn ascii_parse_recovers_the_initial_setup() {
        let engine = BoardEngine::new();
        let (white_pieces, black_pieces) = piece_lists_from_ascii(&engine.ascii());

        let mut expected_white = super::super::context::initial_white_squares();
        let mut expected_black = super::super::context::initial_black_squares();
        let mut white_sorted = white_pieces.clone();
        let mut black_sorted = black_pieces.clone();
        expected_white.sort();
        expected_black.sort();
        white_sorted.sort();
        black_sorted.sort();

        assert_eq!(white_sorted, expected_white);
        assert_eq!(black_sorted, expected_black);
    }

    #[test]
    fn undo_reconstructs_lists_and_keeps_the_engine_aligned() {
        let mut engine = BoardEngine::new();
        engine.try_move(sq("e2"), sq("e4"), Promotion::Queen);
        let fen_after_move = engine.fen();

        let mut context = GameContext::new();
        context.apply_all([
            ContextPatch::WhitePieces(piece_lists_from_ascii(&engine.ascii()).0),
            ContextPatch::Position(fen_after_move.clone()),
            ContextPatch::Turn(Turn::Black),
        ]);

        let output = undo_move(&context, &GameEvent::Undo, &mut engine);

        // The action replayed the move, so the probe engine still matches
        // the host-authoritative board until UNDO_MOVE executes.
        assert_eq!(engine.fen(), fen_after_move);
        assert_eq!(output.outputs[0], Command::UndoMove);

        let mut updated = context.clone();
        updated.apply_all(output.updates);
        assert_eq!(updated.turn, Turn::White);
        assert_eq!(updated.position, super::super::context::INITIAL_FEN);
        assert!(updated.white_pieces.contains(&sq("e2")));
        assert!(!updated.white_pieces.contains(&sq("e4")));
        assert!(updated.status.is_empty());

        let Command::Render(patch) = &output.outputs[1] else {
            panic!("expected a render command second");
        };
        assert_eq!(patch.undo, Some(true));
    }

    #[test]
    fn undo_with_no_moves_is_inert() {
        let context = GameContext::new();
        let mut engine = BoardEngine::new();

        let output = undo_move(&context, &GameEvent::Undo, &mut engine);

        assert!(output.updates.is_empty());
        assert!(output.outputs.is_empty());
    }

    #[test]
    fn clock_actions_keep_one_timer_pending() {
        let context = GameContext::new();
        let mut engine = BoardEngine::new();

        let output = reset_and_start_timer(&context, &GameEvent::Start, &mut engine);
        assert_eq!(output.outputs, vec![Command::SetTimer(TICK_INTERVAL)]);

        let output = update_and_display_clock(&context, &GameEvent::Tick, &mut engine);
        assert_eq!(output.updates, vec![ContextPatch::GameDuration(1)]);
        assert_eq!(output.outputs.len(), 2);
        assert_eq!(output.outputs[1], Command::SetTimer(TICK_INTERVAL));

        let output = pause_clock(&context, &GameEvent::ClockClicked, &mut engine);
        assert_eq!(output.updates, vec![ContextPatch::IsPaused(true)]);
        assert_eq!(output.outputs[1], Command::CancelTimer);

        let output = resume_clock(&context, &GameEvent::ClockClicked, &mut engine);
        assert_eq!(output.updates, vec![ContextPatch::IsPaused(false)]);
        assert_eq!(output.outputs[1], Command::SetTimer(TICK_INTERVAL));
    }
}
