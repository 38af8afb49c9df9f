//! Macros for ergonomic state machine construction.

/// Generate a `State` trait implementation for an enum, with optional
/// hierarchy and final-state clauses.
///
/// # Example
///
/// ```
/// use gambit::state_enum;
///
/// state_enum! {
///     pub enum JobState {
///         Queued,
///         Running,
///         Preparing,
///         Executing,
///         Done,
///     }
///     parents: {
///         Preparing => Running,
///         Executing => Running,
///     }
///     final: [Done]
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(parents: { $($child:ident => $parent:ident),* $(,)? })?
        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn parent(&self) -> Option<Self> {
                #[allow(clippy::match_single_binding)]
                match self {
                    $($(Self::$child => Some(Self::$parent),)*)?
                    _ => None,
                }
            }

            fn is_final(&self) -> bool {
                #[allow(clippy::match_single_binding)]
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
