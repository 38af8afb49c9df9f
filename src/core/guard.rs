//! Guard predicates for controlling state transitions.
//!
//! Guards are boolean functions over the extended state, the incoming event,
//! and the injected environment. They must be free of observable side
//! effects: a guard may probe the environment, but it has to leave it exactly
//! as it found it before returning, because several guards can run in
//! sequence against the same environment while one event is evaluated.

/// Predicate that determines whether a transition is enabled.
///
/// # Example
///
/// ```rust
/// use gambit::core::Guard;
///
/// // Context: a score. Event: points to add. Environment: unused.
/// let over_ten: Guard<u32, u32, ()> = Guard::new(|score, points, _| score + points > 10);
///
/// assert!(over_ten.check(&8, &5, &mut ()));
/// assert!(!over_ten.check(&2, &3, &mut ()));
/// ```
pub struct Guard<X, E, Env> {
    #[allow(clippy::type_complexity)]
    predicate: Box<dyn Fn(&X, &E, &mut Env) -> bool + Send + Sync>,
}

impl<X, E, Env> Guard<X, E, Env> {
    /// Create a guard from a predicate function.
    ///
    /// The predicate must be deterministic for a given context/event/
    /// environment triple and thread-safe (`Send + Sync`).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&X, &E, &mut Env) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the guard.
    pub fn check(&self, context: &X, event: &E, env: &mut Env) -> bool {
        (self.predicate)(context, event, env)
    }
}
