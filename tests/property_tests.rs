//! Property-based tests for the game machine.
//!
//! These tests use proptest to verify the machine's invariants across many
//! randomly generated play sequences.

mod common;

use gambit::core::ExtendedState;
use gambit::engine::{BoardEngine, ChessEngine, MoveRecord, Promotion, Square};
use gambit::game::actions::piece_lists_from_ascii;
use gambit::game::{guards, ContextPatch, GameContext, GameEvent, Turn};
use proptest::prelude::*;

/// Moves the machine will accept as two clicks: the source must be in the
/// mover's position list and the destination must not be (a stale entry
/// there would read as a re-selection).
fn playable_moves(shell: &common::TestShell) -> Vec<MoveRecord> {
    let context = shell.machine().context();
    let mover = match context.turn {
        Turn::White => &context.white_pieces,
        Turn::Black => &context.black_pieces,
    };
    shell
        .engine()
        .legal_moves()
        .into_iter()
        .filter(|m| mover.contains(&m.from) && !mover.contains(&m.to))
        .collect()
}

fn play_choice(shell: &mut common::TestShell, choice: u8) -> bool {
    if shell.machine().is_final() {
        return false;
    }
    let candidates = playable_moves(shell);
    if candidates.is_empty() {
        return false;
    }
    let mv = candidates[choice as usize % candidates.len()];
    shell.process(GameEvent::Clicked(mv.from));
    shell.process(GameEvent::Clicked(mv.to));
    true
}

fn sorted(squares: &[Square]) -> Vec<Square> {
    let mut squares = squares.to_vec();
    squares.sort();
    squares
}

proptest! {
    #[test]
    fn turn_alternates_and_piece_lists_stay_disjoint(
        choices in prop::collection::vec(any::<u8>(), 1..25)
    ) {
        let mut shell = common::shell();
        let mut expected_turn = Turn::White;

        for choice in choices {
            if !play_choice(&mut shell, choice) {
                break;
            }
            expected_turn = expected_turn.flipped();

            let context = shell.machine().context();
            prop_assert_eq!(context.turn, expected_turn);

            let occupied = context.white_pieces.len() + context.black_pieces.len();
            prop_assert!(occupied <= 32);
            prop_assert!(!context
                .white_pieces
                .iter()
                .any(|square| context.black_pieces.contains(square)));
            prop_assert_eq!(
                sorted(&context.white_pieces).windows(2).filter(|w| w[0] == w[1]).count(),
                0
            );
        }
    }

    #[test]
    fn move_then_undo_round_trips_position_and_lists(
        choices in prop::collection::vec(any::<u8>(), 1..12)
    ) {
        let mut shell = common::shell();
        let (last, prefix) = choices.split_last().expect("at least one choice");

        for choice in prefix {
            if !play_choice(&mut shell, *choice) {
                break;
            }
        }

        if !shell.machine().is_final() {
            let before = shell.machine().context().clone();
            let fen_before = shell.engine().fen();

            // One more move, then take it back. A winning move locks the
            // machine in GameOver, where undo no longer applies; and the
            // undo gate itself only opens once white's pieces have left
            // their initial configuration.
            let undo_accepted = play_choice(&mut shell, *last)
                && !shell.machine().is_final()
                && gambit::game::initial_white_squares()
                    .iter()
                    .any(|square| !shell.machine().context().white_pieces.contains(square));
            if undo_accepted {
                shell.process(GameEvent::Undo);

                prop_assert_eq!(shell.engine().fen(), fen_before);
                let context = shell.machine().context();
                prop_assert_eq!(&context.position, &before.position);

                // The rebuilt lists match the engine's board exactly.
                let (white_truth, black_truth) =
                    piece_lists_from_ascii(&shell.engine().ascii());
                prop_assert_eq!(sorted(&context.white_pieces), sorted(&white_truth));
                prop_assert_eq!(sorted(&context.black_pieces), sorted(&black_truth));

                // When the pre-move lists were themselves aligned with the
                // engine, the round trip reproduces them exactly.
                if sorted(&before.white_pieces) == sorted(&white_truth)
                    && sorted(&before.black_pieces) == sorted(&black_truth)
                {
                    prop_assert_eq!(
                        sorted(&context.white_pieces),
                        sorted(&before.white_pieces)
                    );
                    prop_assert_eq!(
                        sorted(&context.black_pieces),
                        sorted(&before.black_pieces)
                    );
                }
            }
        }
    }

    #[test]
    fn guard_probes_never_change_the_fen(
        moves in prop::collection::vec(any::<u8>(), 0..10),
        pick in any::<u8>(),
        file in 0..8u8,
        rank in 0..8u8,
    ) {
        let mut engine = BoardEngine::new();
        for choice in moves {
            let legal = engine.legal_moves();
            if legal.is_empty() {
                break;
            }
            let mv = legal[choice as usize % legal.len()];
            engine.try_move(mv.from, mv.to, Promotion::Queen);
        }

        let (white_pieces, black_pieces) = piece_lists_from_ascii(&engine.ascii());
        let mover = if engine.ply() % 2 == 0 {
            &white_pieces
        } else {
            &black_pieces
        };
        let selected = mover[pick as usize % mover.len()];

        let mut context = GameContext::new();
        context.apply_all([
            ContextPatch::WhitePieces(white_pieces.clone()),
            ContextPatch::BlackPieces(black_pieces.clone()),
            ContextPatch::PieceSquare(Some(selected)),
        ]);

        let target = Square::new(file, rank).expect("indices are in range");
        let event = GameEvent::Clicked(target);
        let fen_before = engine.fen();

        guards::is_white_piece_clicked(&context, &event, &mut engine);
        guards::is_black_piece_clicked(&context, &event, &mut engine);
        guards::is_legal_non_winning_move(&context, &event, &mut engine);
        guards::is_legal_winning_move(&context, &event, &mut engine);
        guards::is_move_history_not_empty(&context, &event, &mut engine);

        prop_assert_eq!(engine.fen(), fen_before);
    }

    #[test]
    fn reselecting_own_pieces_changes_only_the_selection(
        picks in prop::collection::vec(0..16usize, 1..8)
    ) {
        let mut shell = common::shell();
        let whites = GameContext::new().white_pieces;

        for pick in picks {
            let square = whites[pick % whites.len()];
            shell.process(GameEvent::Clicked(square));

            let context = shell.machine().context();
            prop_assert_eq!(context.turn, Turn::White);
            prop_assert_eq!(sorted(&context.white_pieces), sorted(&whites));
            prop_assert_eq!(context.piece_square, Some(square));
            prop_assert!(context.square_styles.contains_key(&square));
        }
    }
}
