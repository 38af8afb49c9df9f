//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, ExtendedState, State};
use crate::machine::{Machine, Transition};

/// Builder for constructing state machines with a fluent API.
pub struct MachineBuilder<S: State, E: Event, X: ExtendedState, C, Env> {
    initial: Option<S>,
    context: Option<X>,
    transitions: Vec<Transition<S, E, X, C, Env>>,
}

impl<S, E, X, C, Env> MachineBuilder<S, E, X, C, Env>
where
    S: State,
    E: Event,
    X: ExtendedState,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            context: None,
            transitions: Vec::new(),
        }
    }

    /// Set the initial control state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the initial extended state (required).
    pub fn context(mut self, context: X) -> Self {
        self.context = Some(context);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(
        mut self,
        builder: TransitionBuilder<S, E, X, C, Env>,
    ) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, E, X, C, Env>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Machine<S, E, X, C, Env>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let context = self.context.ok_or(BuildError::MissingContext)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let mut machine = Machine::new(initial, context);
        for transition in self.transitions {
            machine.add_transition(transition);
        }

        Ok(machine)
    }
}

impl<S, E, X, C, Env> Default for MachineBuilder<S, E, X, C, Env>
where
    S: State,
    E: Event,
    X: ExtendedState,
{
    fn default() -> Self {
        Self::new()
    }
}
