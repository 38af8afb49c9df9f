//! Core State trait for hierarchical state machine states.
//!
//! States form a tree: every state names at most one parent composite.
//! The machine's active configuration is always a leaf plus the chain of
//! ancestors above it.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine control states.
///
/// All methods are pure. States represent immutable values that describe
/// the current position in a (possibly hierarchical) state graph.
///
/// # Required Traits
///
/// - `Clone`: states must be cloneable for history and memory tracking
/// - `PartialEq`: states must be comparable for transition selection
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable
///
/// # Example
///
/// ```rust
/// use gambit::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Idle,
///     Working,
///     Drafting,
///     Done,
/// }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Working => "Working",
///             Self::Drafting => "Drafting",
///             Self::Done => "Done",
///         }
///     }
///
///     fn parent(&self) -> Option<Self> {
///         match self {
///             Self::Drafting => Some(Self::Working),
///             _ => None,
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Done)
///     }
/// }
///
/// let ancestors: Vec<Phase> = Phase::Drafting.ancestors().collect();
/// assert_eq!(ancestors, vec![Phase::Working]);
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// The composite state this state is nested in, if any.
    ///
    /// Default implementation returns `None` (flat machine).
    fn parent(&self) -> Option<Self> {
        None
    }

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Iterate over enclosing composites, innermost first.
    ///
    /// The state itself is not included.
    fn ancestors(&self) -> Ancestors<Self> {
        Ancestors {
            next: self.parent(),
        }
    }
}

/// Iterator over a state's enclosing composites, innermost first.
pub struct Ancestors<S: State> {
    next: Option<S>,
}

impl<S: State> Iterator for Ancestors<S> {
    type Item = S;

    fn next(&mut self) -> Option<S> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}
