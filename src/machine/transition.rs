//! Transition types: triggers, targets, actions and their outputs.

use crate::core::{Event, ExtendedState, Guard, State};
use std::sync::Arc;

/// What sets a transition off.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Trigger<K> {
    /// Taken when the source composite state is entered, to drill down to
    /// its initial child.
    Init,
    /// Taken immediately after the source state is settled in (eventless).
    Always,
    /// Taken when an event of this kind arrives.
    On(K),
}

impl<K: std::fmt::Debug> Trigger<K> {
    /// Label used in transition history records.
    pub fn label(&self) -> String {
        match self {
            Trigger::Init => "init".to_string(),
            Trigger::Always => "always".to_string(),
            Trigger::On(kind) => format!("{kind:?}"),
        }
    }
}

/// Where a transition lands.
#[derive(Clone, PartialEq, Debug)]
pub enum Target<S> {
    /// A state, entered normally (composites drill down via their init
    /// transitions).
    State(S),
    /// Deep history: re-enter the composite at the leaf it last had active,
    /// falling back to normal entry if it was never entered.
    DeepHistory(S),
}

/// What an action produces: ordered state patches and ordered output
/// commands. Patches are applied left-to-right; commands are handed to the
/// host in emission order.
#[derive(Debug)]
pub struct ActionOutput<P, C> {
    pub updates: Vec<P>,
    pub outputs: Vec<C>,
}

impl<P, C> ActionOutput<P, C> {
    /// No state change, no outputs.
    pub fn none() -> Self {
        Self {
            updates: Vec::new(),
            outputs: Vec::new(),
        }
    }
}

impl<P, C> Default for ActionOutput<P, C> {
    fn default() -> Self {
        Self::none()
    }
}

/// Type alias for transition action functions.
///
/// Actions read the extended state, the event and the environment, and
/// return the patches and commands for the machine to apply and emit. They
/// may probe the environment but must roll any probe back before returning.
#[allow(type_alias_bounds)]
pub type Action<E, X: ExtendedState, C, Env> =
    Arc<dyn Fn(&X, &E, &mut Env) -> ActionOutput<X::Patch, C> + Send + Sync>;

/// A single row of the transition table.
pub struct Transition<S: State, E: Event, X: ExtendedState, C, Env> {
    pub from: S,
    pub trigger: Trigger<E::Kind>,
    pub guard: Option<Guard<X, E, Env>>,
    pub target: Target<S>,
    pub action: Action<E, X, C, Env>,
}

impl<S: State, E: Event, X: ExtendedState, C, Env> Transition<S, E, X, C, Env> {
    /// Does this row handle `kind` from `from`? Guards are evaluated
    /// separately, by the machine.
    pub fn matches_event(&self, from: &S, kind: E::Kind) -> bool {
        self.from == *from && matches!(self.trigger, Trigger::On(k) if k == kind)
    }

    /// Is this the init transition out of `from`?
    pub fn matches_init(&self, from: &S) -> bool {
        self.from == *from && matches!(self.trigger, Trigger::Init)
    }

    /// Is this an eventless transition out of `from`?
    pub fn matches_always(&self, from: &S) -> bool {
        self.from == *from && matches!(self.trigger, Trigger::Always)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Start,
        End,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::End => "End",
            }
        }
    }

    #[derive(Clone, Debug)]
    struct Ping;

    impl Event for Ping {
        type Kind = u8;

        fn kind(&self) -> u8 {
            0
        }
    }

    #[derive(Clone, Debug)]
    struct Ctx;

    impl ExtendedState for Ctx {
        type Patch = ();

        fn apply(&mut self, _patch: ()) {}
    }

    fn transition(trigger: Trigger<u8>) -> Transition<TestState, Ping, Ctx, (), ()> {
        Transition {
            from: TestState::Start,
            trigger,
            guard: None,
            target: Target::State(TestState::End),
            action: Arc::new(|_, _, _| ActionOutput::none()),
        }
    }

    #[test]
    fn matches_event_checks_source_and_kind() {
        let t = transition(Trigger::On(0));

        assert!(t.matches_event(&TestState::Start, 0));
        assert!(!t.matches_event(&TestState::Start, 1));
        assert!(!t.matches_event(&TestState::End, 0));
        assert!(!t.matches_init(&TestState::Start));
    }

    #[test]
    fn matches_init_and_always_ignore_event_rows() {
        let init = transition(Trigger::Init);
        let always = transition(Trigger::Always);

        assert!(init.matches_init(&TestState::Start));
        assert!(!init.matches_always(&TestState::Start));
        assert!(always.matches_always(&TestState::Start));
        assert!(!always.matches_event(&TestState::Start, 0));
    }

    #[test]
    fn trigger_labels() {
        assert_eq!(Trigger::<u8>::Init.label(), "init");
        assert_eq!(Trigger::<u8>::Always.label(), "always");
        assert_eq!(Trigger::On(7u8).label(), "7");
    }

    #[test]
    fn action_output_none_is_empty() {
        let output: ActionOutput<(), ()> = ActionOutput::none();
        assert!(output.updates.is_empty());
        assert!(output.outputs.is_empty());
    }
}
