//! The imperative shell around the machine.
//!
//! The shell owns the single shared engine instance and the injected effect
//! handlers, and interprets the commands actions emit. Events are processed
//! strictly one at a time: a dispatched event runs to completion, then its
//! commands execute in emission order, before the next event is accepted.

mod render;
mod timer;

pub use render::{RenderProps, Renderer, TraceRenderer};
pub use timer::{ManualTimer, TimerService};

use crate::builder::BuildError;
use crate::engine::{ChessEngine, Promotion};
use crate::game::{game_machine, ChessMachine, Command, GameEvent};
use tracing::{debug, warn};

/// Host harness wiring the machine to an engine, a renderer and a timer.
///
/// The engine is shared: guards and actions probe it (and roll back), while
/// `MOVE_PIECE` and `UNDO_MOVE` commands mutate it durably.
pub struct GameShell<En: ChessEngine + 'static, R: Renderer, T: TimerService> {
    machine: ChessMachine<En>,
    engine: En,
    renderer: R,
    timer: T,
    props: RenderProps,
}

impl<En: ChessEngine + 'static, R: Renderer, T: TimerService> GameShell<En, R, T> {
    pub fn new(engine: En, renderer: R, timer: T) -> Result<Self, BuildError> {
        Ok(Self {
            machine: game_machine()?,
            engine,
            renderer,
            timer,
            props: RenderProps::default(),
        })
    }

    /// Enter the machine and dispatch the one-time `START` event.
    pub fn start(&mut self) {
        let commands = self.machine.start(&GameEvent::Start, &mut self.engine);
        self.execute(commands);
    }

    /// Process a single event to completion.
    pub fn process(&mut self, event: GameEvent) {
        let commands = self.machine.dispatch(&event, &mut self.engine);
        self.execute(commands);
    }

    fn execute(&mut self, commands: Vec<Command>) {
        for command in commands {
            debug!(?command, "executing");
            match command {
                Command::Render(patch) => {
                    self.props.merge(&patch);
                    self.renderer.render(&self.props);
                }
                Command::MovePiece { from, to } => {
                    if self.engine.try_move(from, to, Promotion::Queen).is_none() {
                        warn!(%from, %to, "authoritative move was rejected by the engine");
                    }
                }
                Command::UndoMove => {
                    if self.engine.undo().is_none() {
                        warn!("undo requested with no move to take back");
                    }
                }
                Command::SetTimer(delay) => self.timer.set(delay),
                Command::CancelTimer => self.timer.cancel(),
            }
        }
    }

    /// The running machine (control state, context, history).
    pub fn machine(&self) -> &ChessMachine<En> {
        &self.machine
    }

    /// The authoritative engine.
    pub fn engine(&self) -> &En {
        &self.engine
    }

    /// The timer handler.
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Mutable access to the timer handler, for drivers that fire it.
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The currently retained render props.
    pub fn props(&self) -> &RenderProps {
        &self.props
    }
}
