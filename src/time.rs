//! Timing abstraction so animation pacing is injectable.

use std::time::Duration;

/// Trait for abstracting how the engine waits between frames.
///
/// Production code uses [`ThreadSleeper`]; tests substitute a controllable
/// implementation to drive animations without real delays.
pub trait Sleeper {
    /// Blocks the calling thread for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Sleeper backed by [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
