//! Timer effect handler.

use std::time::Duration;

/// One-shot timer effect handler.
///
/// The machine maintains at most one pending timer: it cancels before every
/// pause and re-arms on every tick and resume, so `set` always replaces any
/// previous arming.
pub trait TimerService {
    /// Arm the one-shot timer.
    fn set(&mut self, delay: Duration);

    /// Cancel the pending timer, if any.
    fn cancel(&mut self);
}

/// Timer that only tracks its arming state; the driver decides when the
/// pending timer "fires" by injecting a `TICK` event itself.
#[derive(Debug, Default)]
pub struct ManualTimer {
    pending: Option<Duration>,
}

impl ManualTimer {
    /// The currently armed delay, if any.
    pub fn pending(&self) -> Option<Duration> {
        self.pending
    }

    /// Consume the armed timer, simulating it firing.
    pub fn fire(&mut self) -> Option<Duration> {
        self.pending.take()
    }
}

impl TimerService for ManualTimer {
    fn set(&mut self, delay: Duration) {
        self.pending = Some(delay);
    }

    fn cancel(&mut self) {
        self.pending = None;
    }
}
