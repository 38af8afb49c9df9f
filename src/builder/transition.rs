//! Builder for constructing state transitions.

use crate::builder::error::BuildError;
use crate::core::{Event, ExtendedState, Guard, State};
use crate::machine::{Action, ActionOutput, Target, Transition, Trigger};
use std::sync::Arc;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: State, E: Event, X: ExtendedState, C, Env> {
    from: Option<S>,
    trigger: Option<Trigger<E::Kind>>,
    guard: Option<Guard<X, E, Env>>,
    target: Option<Target<S>>,
    action: Option<Action<E, X, C, Env>>,
}

impl<S, E, X, C, Env> TransitionBuilder<S, E, X, C, Env>
where
    S: State,
    E: Event,
    X: ExtendedState,
{
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            trigger: None,
            guard: None,
            target: None,
            action: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Trigger on an event of this kind.
    pub fn on(mut self, kind: E::Kind) -> Self {
        self.trigger = Some(Trigger::On(kind));
        self
    }

    /// Trigger when the source composite is entered (init transition).
    pub fn init(mut self) -> Self {
        self.trigger = Some(Trigger::Init);
        self
    }

    /// Trigger immediately after the source state settles (eventless).
    pub fn always(mut self) -> Self {
        self.trigger = Some(Trigger::Always);
        self
    }

    /// Add a guard predicate (optional).
    pub fn guard(mut self, guard: Guard<X, E, Env>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&X, &E, &mut Env) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Target a state, entered normally (required unless `to_deep_history`).
    pub fn to(mut self, state: S) -> Self {
        self.target = Some(Target::State(state));
        self
    }

    /// Target a composite's deep-history pseudo-state.
    pub fn to_deep_history(mut self, composite: S) -> Self {
        self.target = Some(Target::DeepHistory(composite));
        self
    }

    /// Set the action (required unless `identity`).
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&X, &E, &mut Env) -> ActionOutput<X::Patch, C> + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Set an action that changes nothing and emits nothing.
    pub fn identity(self) -> Self {
        self.action(|_, _, _| ActionOutput::none())
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, E, X, C, Env>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let trigger = self.trigger.ok_or(BuildError::MissingTrigger)?;
        let target = self.target.ok_or(BuildError::MissingTarget)?;
        let action = self.action.ok_or(BuildError::MissingAction)?;

        Ok(Transition {
            from,
            trigger,
            guard: self.guard,
            target,
            action,
        })
    }
}

impl<S, E, X, C, Env> Default for TransitionBuilder<S, E, X, C, Env>
where
    S: State,
    E: Event,
    X: ExtendedState,
{
    fn default() -> Self {
        Self::new()
    }
}
