//! The machine: owns the control state, the extended state, the transition
//! table, and the per-composite memory used for deep-history re-entry.
//!
//! Dispatch is strictly serial: one event is evaluated and run to completion
//! (including init drilling and eventless follow-ups) before control returns
//! to the caller. Events with no enabled transition anywhere on the active
//! ancestor chain are absorbed silently.

use crate::core::{Event, ExtendedState, State, StateHistory, TransitionRecord};
use crate::machine::transition::{ActionOutput, Target, Transition};
use chrono::Utc;
use tracing::{debug, trace, warn};

/// Upper bound on chained init/eventless segments per dispatched event.
/// A well-formed machine never gets near this; it only exists to stop a
/// malformed eventless cycle from spinning forever.
const MAX_CHAIN: usize = 64;

/// A running hierarchical state machine.
pub struct Machine<S: State, E: Event, X: ExtendedState, C, Env> {
    current: S,
    context: X,
    transitions: Vec<Transition<S, E, X, C, Env>>,
    /// Last active leaf per composite state, for deep-history targets.
    memory: Vec<(S, S)>,
    history: StateHistory<S>,
    started: bool,
}

impl<S: State, E: Event, X: ExtendedState, C, Env> Machine<S, E, X, C, Env> {
    /// Create a machine in the given initial state with its initial
    /// extended state.
    pub fn new(initial: S, context: X) -> Self {
        Self {
            current: initial,
            context,
            transitions: Vec::new(),
            memory: Vec::new(),
            history: StateHistory::new(),
            started: false,
        }
    }

    /// Append a transition row. Rows are examined in insertion order;
    /// within one source state the first row whose guard passes wins.
    pub fn add_transition(&mut self, transition: Transition<S, E, X, C, Env>) {
        self.transitions.push(transition);
    }

    /// The currently active state (a leaf, once started).
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// The extended state record.
    pub fn context(&self) -> &X {
        &self.context
    }

    /// History of executed transition segments.
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Check if the machine is in a final state.
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Enter the initial state (drilling into composites) and deliver the
    /// machine's first event. Subsequent calls behave like plain
    /// [`dispatch`](Self::dispatch).
    pub fn start(&mut self, event: &E, env: &mut Env) -> Vec<C> {
        let mut outputs = Vec::new();
        if !self.started {
            self.started = true;
            let initial = self.current.clone();
            let mut fuel = MAX_CHAIN;
            self.settle(initial, event, env, &mut outputs, &mut fuel);
        }
        outputs.extend(self.dispatch(event, env));
        outputs
    }

    /// Evaluate one event against the transition table.
    ///
    /// The search starts at the active leaf and climbs the ancestor chain;
    /// the innermost state with an enabled transition handles the event.
    /// Returns the commands emitted by every action run for this event, in
    /// emission order. An event nothing handles returns no commands and
    /// changes nothing.
    pub fn dispatch(&mut self, event: &E, env: &mut Env) -> Vec<C> {
        let mut outputs = Vec::new();
        let kind = event.kind();

        let mut scope = Some(self.current.clone());
        while let Some(state) = scope {
            if let Some(idx) = self.position(|t| t.matches_event(&state, kind), event, env) {
                let mut fuel = MAX_CHAIN;
                let entered = self.run_segment(idx, event, env, &mut outputs);
                self.settle(entered, event, env, &mut outputs, &mut fuel);
                return outputs;
            }
            scope = state.parent();
        }

        trace!(state = self.current.name(), event = ?kind, "event absorbed");
        outputs
    }

    /// Index of the first row passing `select` whose guard is enabled.
    fn position<F>(&self, select: F, event: &E, env: &mut Env) -> Option<usize>
    where
        F: Fn(&Transition<S, E, X, C, Env>) -> bool,
    {
        let context = &self.context;
        self.transitions.iter().position(|t| {
            select(t)
                && t.guard
                    .as_ref()
                    .map_or(true, |g| g.check(context, event, env))
        })
    }

    /// Run one transition segment: action, patches, outputs, record.
    /// Returns the state the segment enters (resolving deep history).
    fn run_segment(&mut self, idx: usize, event: &E, env: &mut Env, outputs: &mut Vec<C>) -> S {
        let from = self.current.clone();
        let (output, target, label) = {
            let transition = &self.transitions[idx];
            (
                (transition.action)(&self.context, event, env),
                transition.target.clone(),
                transition.trigger.label(),
            )
        };

        let ActionOutput {
            updates,
            outputs: mut produced,
        } = output;
        self.context.apply_all(updates);
        outputs.append(&mut produced);

        let entered = match target {
            Target::State(state) => state,
            Target::DeepHistory(composite) => self.recall(&composite).unwrap_or(composite),
        };

        debug!(
            from = from.name(),
            to = entered.name(),
            trigger = %label,
            "transition"
        );
        self.history = self.history.record(TransitionRecord {
            from,
            to: entered.clone(),
            trigger: label,
            timestamp: Utc::now(),
        });
        entered
    }

    /// Drive `state` down to a settled leaf: follow init transitions into
    /// composites, remember the leaf for deep history, then follow any
    /// eventless transition out of it.
    fn settle(&mut self, state: S, event: &E, env: &mut Env, outputs: &mut Vec<C>, fuel: &mut usize) {
        let mut state = state;
        loop {
            self.current = state.clone();

            if *fuel == 0 {
                warn!(state = state.name(), "transition chain hit its limit; stopping");
                return;
            }
            *fuel -= 1;

            // Composite entry drills down via the init transition.
            if let Some(idx) = self.position(|t| t.matches_init(&state), event, env) {
                state = self.run_segment(idx, event, env, outputs);
                continue;
            }

            // Settled on a leaf: remember it for deep-history re-entry.
            self.remember(&state);

            // Eventless transition out of the settled state, if any.
            if let Some(idx) = self.position(|t| t.matches_always(&state), event, env) {
                state = self.run_segment(idx, event, env, outputs);
                continue;
            }

            return;
        }
    }

    /// Record `leaf` as the last active leaf of each of its composites.
    fn remember(&mut self, leaf: &S) {
        for ancestor in leaf.ancestors() {
            if let Some(slot) = self.memory.iter_mut().find(|(c, _)| *c == ancestor) {
                slot.1 = leaf.clone();
            } else {
                self.memory.push((ancestor, leaf.clone()));
            }
        }
    }

    /// The leaf `composite` last had active, if it was ever entered.
    fn recall(&self, composite: &S) -> Option<S> {
        self.memory
            .iter()
            .find(|(c, _)| c == composite)
            .map(|(_, leaf)| leaf.clone())
    }
}
