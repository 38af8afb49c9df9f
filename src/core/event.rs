//! Event trait for machine inputs.
//!
//! Events carry payloads (a clicked square, say) while the transition table
//! matches only on the event's kind. The `Kind` associated type is the
//! payload-free projection the table is declared against.

use std::fmt::Debug;

/// Trait for machine input events.
///
/// # Example
///
/// ```rust
/// use gambit::core::Event;
///
/// #[derive(Clone, Debug)]
/// enum Input {
///     Clicked(u8),
///     Refresh,
/// }
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum InputKind {
///     Clicked,
///     Refresh,
/// }
///
/// impl Event for Input {
///     type Kind = InputKind;
///
///     fn kind(&self) -> InputKind {
///         match self {
///             Self::Clicked(_) => InputKind::Clicked,
///             Self::Refresh => InputKind::Refresh,
///         }
///     }
/// }
///
/// assert_eq!(Input::Clicked(3).kind(), InputKind::Clicked);
/// ```
pub trait Event: Debug {
    /// Payload-free discriminant the transition table matches on.
    type Kind: Copy + PartialEq + Debug + Send + Sync;

    /// Project this event onto its kind.
    fn kind(&self) -> Self::Kind;
}
