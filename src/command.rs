//! Animation requests consumed by the worker.

/// One animation to run on the ring.
///
/// Requests are immutable values: constructed by a caller, queued, and
/// consumed exactly once by the worker, strictly in arrival order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationRequest {
    /// Intensity ramp rotated toward the wake direction (degrees).
    Wakeup {
        /// Direction the wake word came from, in degrees. Any value is
        /// accepted; the mapping onto the ring is periodic with period 180.
        direction: f32,
    },

    /// Intensity ramp in the reference orientation.
    Listen,

    /// Slow rotation until the next request arrives, then a short fade.
    Think,

    /// Intensity bounce until the next request arrives, then a decay to dark.
    Speak,

    /// A single all-dark frame.
    Off,
}
