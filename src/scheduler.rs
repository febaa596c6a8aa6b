//! Scheduling seam for the periodic training loop.
//!
//! The host owns real time: it binds [`Scheduler::start`] to whatever timing
//! primitive it has (an event-loop timer, a frame callback). The core never
//! sleeps or spawns threads, so `Session::train_one_sweep` stays synchronous
//! and testable independent of wall clocks.
//!
//! Sweeps never overlap: each tick runs synchronously and a scheduler must not
//! fire concurrently with itself.

use std::time::Duration;

/// A periodic invoker of a tick callback.
pub trait Scheduler {
    /// Begin invoking `tick` every `interval`. Replaces any previous tick.
    fn start(&mut self, interval: Duration, tick: Box<dyn FnMut()>);

    /// Cancel future invocations. In-flight ticks (none: ticks are synchronous)
    /// are unaffected.
    fn stop(&mut self);
}

/// A scheduler driven by hand.
///
/// Holds the tick and fires it only when told to, which makes time-dependent
/// call sites deterministic in tests.
#[derive(Default)]
pub struct ManualScheduler {
    tick: Option<Box<dyn FnMut()>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the tick once. Returns false when stopped (nothing to fire).
    pub fn fire(&mut self) -> bool {
        match &mut self.tick {
            Some(tick) => {
                tick();
                true
            }
            None => false,
        }
    }

    /// Fire the tick `n` times; returns how many actually ran.
    pub fn fire_n(&mut self, n: usize) -> usize {
        (0..n).take_while(|_| self.fire()).count()
    }
}

impl Scheduler for ManualScheduler {
    fn start(&mut self, _interval: Duration, tick: Box<dyn FnMut()>) {
        self.tick = Some(tick);
    }

    fn stop(&mut self) {
        self.tick = None;
    }
}
