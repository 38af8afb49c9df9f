//! Extended state: the mutable data record carried alongside control state.
//!
//! Actions never touch the record directly. They return an ordered list of
//! typed patches; the machine applies them left-to-right, so later patches
//! overwrite earlier ones for the same field.

use std::fmt::Debug;

/// Trait for the machine's extended state record.
///
/// `Patch` is a typed field-level setter, not a dynamic merge: each variant
/// names one field and carries its replacement value.
///
/// # Example
///
/// ```rust
/// use gambit::core::ExtendedState;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Counter {
///     count: u32,
///     label: String,
/// }
///
/// #[derive(Debug)]
/// enum CounterPatch {
///     Count(u32),
///     Label(String),
/// }
///
/// impl ExtendedState for Counter {
///     type Patch = CounterPatch;
///
///     fn apply(&mut self, patch: CounterPatch) {
///         match patch {
///             CounterPatch::Count(count) => self.count = count,
///             CounterPatch::Label(label) => self.label = label,
///         }
///     }
/// }
///
/// let mut counter = Counter { count: 0, label: String::new() };
/// counter.apply_all([CounterPatch::Count(1), CounterPatch::Count(2)]);
/// assert_eq!(counter.count, 2);
/// ```
pub trait ExtendedState: Clone + Debug {
    /// A single field-level setter.
    type Patch: Debug;

    /// Apply one patch to the record.
    fn apply(&mut self, patch: Self::Patch);

    /// Apply patches in order; later patches win.
    fn apply_all(&mut self, patches: impl IntoIterator<Item = Self::Patch>) {
        for patch in patches {
            self.apply(patch);
        }
    }
}
