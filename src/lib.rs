//! Gambit: a hierarchical state machine that drives a chess game UI.
//!
//! The crate separates three layers:
//!
//! - **Pure machine core** ([`core`], [`machine`], [`builder`]): a small
//!   hierarchical-statechart interpreter with guarded transitions, init
//!   drilling, eventless transitions and deep-history re-entry. Actions
//!   return typed state patches plus declarative commands; they never
//!   perform effects.
//! - **Machine definition** ([`game`]): the chess UI machine itself - the
//!   state hierarchy for turn-taking and piece selection, the pausable
//!   clock overlay, undo with full position-list reconstruction, and the
//!   command set the host interprets.
//! - **Imperative shell** ([`shell`], [`engine`]): the host harness that
//!   owns the shared chess engine, merges render patches, and maintains the
//!   single pending timer.
//!
//! # Example
//!
//! ```rust
//! use gambit::engine::BoardEngine;
//! use gambit::game::{GameEvent, GameState};
//! use gambit::shell::{GameShell, ManualTimer, TraceRenderer};
//!
//! # fn main() -> Result<(), gambit::BuildError> {
//! let mut shell = GameShell::new(BoardEngine::new(), TraceRenderer, ManualTimer::default())?;
//! shell.start();
//!
//! let e2 = "e2".parse().unwrap();
//! let e4 = "e4".parse().unwrap();
//! shell.process(GameEvent::Clicked(e2));
//! shell.process(GameEvent::Clicked(e4));
//!
//! assert_eq!(shell.machine().current_state(), &GameState::BlackPlays);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod game;
pub mod machine;
pub mod shell;

// Re-export commonly used types
pub use self::builder::{BuildError, MachineBuilder, TransitionBuilder};
pub use self::core::{Event, ExtendedState, Guard, State, StateHistory, TransitionRecord};
pub use self::machine::{Action, ActionOutput, Machine, Target, Transition, Trigger};
