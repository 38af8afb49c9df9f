//! Build errors for state machine and transition builders.

use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Initial extended state not specified. Call .context(context) before .build()")]
    MissingContext,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition trigger not specified. Call .on(kind), .init() or .always()")]
    MissingTrigger,

    #[error("Transition target not specified. Call .to(state) or .to_deep_history(state)")]
    MissingTarget,

    #[error("Transition action not specified. Call .action(f) or .identity()")]
    MissingAction,
}
