//! Cooperative preemption of indefinite animations.

use core::sync::atomic::{AtomicBool, Ordering};

/// Shared cancellation flag for the indefinite animations.
///
/// The flag is raised on every enqueued request and cleared only by the
/// routine that is about to enter its indefinite loop, which then polls it
/// once per iteration.
///
/// Check-and-clear granularity is deliberately the loop iteration. A signal
/// raised between a routine's [`reset`](PreemptSignal::reset) and its first
/// poll is still observed; a signal racing with `reset` inside the same
/// iteration window may only be observed on the following cycle. Worst-case
/// cancellation latency is one iteration period plus any non-cancellable exit
/// phase of the running animation.
#[derive(Debug, Default)]
pub struct PreemptSignal {
    flag: AtomicBool,
}

impl PreemptSignal {
    /// Creates an unsignaled flag.
    pub const fn new() -> Self {
        Self {
            flag: AtomicBool::new(false),
        }
    }

    /// Raises the flag. Idempotent and safe from any thread.
    pub fn signal(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Clears the flag. Called only by the routine about to loop.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Release);
    }

    /// Polls the flag without clearing it.
    pub fn is_signaled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}
