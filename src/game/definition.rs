//! The game machine: state hierarchy plus the guarded transition table.

use super::context::GameContext;
use super::event::{GameEvent, GameEventKind};
use super::state::GameState;
use super::{actions, command::Command, guards};
use crate::builder::{BuildError, MachineBuilder, TransitionBuilder};
use crate::engine::ChessEngine;
use crate::machine::Machine;

/// The assembled chess UI machine, generic over the injected engine.
pub type ChessMachine<En> = Machine<GameState, GameEvent, GameContext, Command, En>;

/// Build the full machine definition.
///
/// Rows are declared in the order guards must be evaluated in: within one
/// source state the first passing guard wins. A clicked square that is
/// neither a re-selection nor a legal destination matches no row and the
/// click is absorbed.
pub fn game_machine<En: ChessEngine + 'static>() -> Result<ChessMachine<En>, BuildError> {
    use GameEventKind::{Clicked, ClockClicked, Start, Tick, Undo};
    use GameState::*;

    MachineBuilder::new()
        .initial(Off)
        .context(GameContext::new())
        .transition(TransitionBuilder::new().from(Off).on(Start).to(GameOn).identity())?
        .transition(
            TransitionBuilder::new()
                .from(GameOn)
                .init()
                .to(WhiteTurn)
                .action(actions::reset_and_start_timer),
        )?
        .transition(
            TransitionBuilder::new()
                .from(WhiteTurn)
                .init()
                .to(WhitePlays)
                .action(actions::display_init_screen),
        )?
        // Clock overlay: ticks and pauses leave GameOn and come back through
        // deep history, so the gameplay position is never lost.
        .transition(
            TransitionBuilder::new()
                .from(GameOn)
                .on(Tick)
                .to(UpdatingClock)
                .action(actions::update_and_display_clock),
        )?
        .transition(
            TransitionBuilder::new()
                .from(UpdatingClock)
                .always()
                .to_deep_history(GameOn)
                .identity(),
        )?
        .transition(
            TransitionBuilder::new()
                .from(GameOn)
                .on(ClockClicked)
                .to(PausedClock)
                .action(actions::pause_clock),
        )?
        .transition(
            TransitionBuilder::new()
                .from(PausedClock)
                .on(ClockClicked)
                .to_deep_history(GameOn)
                .action(actions::resume_clock),
        )?
        .transition(
            TransitionBuilder::new()
                .from(WhitePlays)
                .on(Clicked)
                .when(guards::is_white_piece_clicked)
                .to(WhitePieceSelected)
                .action(actions::highlight_selected_piece),
        )?
        .transition(
            TransitionBuilder::new()
                .from(WhitePieceSelected)
                .on(Clicked)
                .when(guards::is_white_piece_clicked)
                .to(WhitePieceSelected)
                .action(actions::highlight_selected_piece),
        )?
        .transition(
            TransitionBuilder::new()
                .from(WhitePieceSelected)
                .on(Clicked)
                .when(guards::is_legal_non_winning_move)
                .to(BlackPlays)
                .action(actions::move_white_piece),
        )?
        .transition(
            TransitionBuilder::new()
                .from(WhitePieceSelected)
                .on(Clicked)
                .when(guards::is_legal_winning_move)
                .to(GameOver)
                .action(actions::end_white_game),
        )?
        .transition(
            TransitionBuilder::new()
                .from(BlackPlays)
                .on(Clicked)
                .when(guards::is_black_piece_clicked)
                .to(BlackPieceSelected)
                .action(actions::highlight_selected_piece),
        )?
        .transition(
            TransitionBuilder::new()
                .from(BlackPieceSelected)
                .on(Clicked)
                .when(guards::is_black_piece_clicked)
                .to(BlackPieceSelected)
                .action(actions::highlight_selected_piece),
        )?
        .transition(
            TransitionBuilder::new()
                .from(BlackPieceSelected)
                .on(Clicked)
                .when(guards::is_legal_non_winning_move)
                .to(WhitePlays)
                .action(actions::move_black_piece),
        )?
        .transition(
            TransitionBuilder::new()
                .from(BlackPieceSelected)
                .on(Clicked)
                .when(guards::is_legal_winning_move)
                .to(GameOver)
                .action(actions::end_black_game),
        )?
        .transition(
            TransitionBuilder::new()
                .from(WhiteTurn)
                .on(Undo)
                .when(guards::is_move_history_not_empty)
                .to(BlackPlays)
                .action(actions::undo_move),
        )?
        .transition(
            TransitionBuilder::new()
                .from(BlackTurn)
                .on(Undo)
                .when(guards::is_move_history_not_empty)
                .to(WhitePlays)
                .action(actions::undo_move),
        )?
        .build()
}
