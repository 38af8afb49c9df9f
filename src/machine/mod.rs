//! The hierarchical machine: transition rows and the interpreter that runs
//! them.
//!
//! A machine is a declarative table of [`Transition`] rows over a control
//! state, an extended state, an event type, a command type, and an injected
//! environment. Actions never perform effects; they return typed patches for
//! the extended state plus ordered commands for the host to interpret.

mod interpreter;
mod transition;

pub use interpreter::Machine;
pub use transition::{Action, ActionOutput, Target, Transition, Trigger};
