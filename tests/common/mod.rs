//! Shared test infrastructure for ring-animator integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use palette::Srgb;
use ring_animator::{Frame, PreemptSignal, RING_LEDS, RingDriver, Sleeper};

// ============================================================================
// Mock Driver
// ============================================================================

/// One flushed frame as received by the driver, in device-native form.
pub type NativeFrame = [Srgb<u8>; RING_LEDS];

/// Mock ring driver that records every flushed frame.
pub struct MockDriver {
    staged: NativeFrame,
    frames: Arc<Mutex<Vec<NativeFrame>>>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self {
            staged: [Srgb::new(0, 0, 0); RING_LEDS],
            frames: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the recorded frame history, usable after the driver has
    /// moved into an engine or worker.
    pub fn history(&self) -> FrameHistory {
        FrameHistory(Arc::clone(&self.frames))
    }
}

impl RingDriver for MockDriver {
    type Error = std::convert::Infallible;

    fn set_pixel(&mut self, index: usize, color: Srgb<u8>) -> Result<(), Self::Error> {
        self.staged[index] = color;
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.frames.lock().unwrap().push(self.staged);
        Ok(())
    }
}

/// Shared view of the frames a [`MockDriver`] has flushed.
#[derive(Clone)]
pub struct FrameHistory(Arc<Mutex<Vec<NativeFrame>>>);

impl FrameHistory {
    pub fn frames(&self) -> Vec<NativeFrame> {
        self.0.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

/// Ring driver whose operations always fail.
pub struct BrokenDriver;

impl RingDriver for BrokenDriver {
    type Error = &'static str;

    fn set_pixel(&mut self, _index: usize, _color: Srgb<u8>) -> Result<(), Self::Error> {
        Err("bus unavailable")
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        Err("bus unavailable")
    }
}

// ============================================================================
// Mock Sleepers
// ============================================================================

/// Sleeper that never blocks.
pub struct NoopSleeper;

impl Sleeper for NoopSleeper {
    fn sleep(&self, _duration: Duration) {}
}

/// Sleeper that raises the preempt signal after a fixed number of sleep
/// calls, driving indefinite animations to a deterministic exit. Records
/// every requested sleep duration.
pub struct SignalAfter {
    preempt: Arc<PreemptSignal>,
    remaining: AtomicUsize,
    durations: Arc<Mutex<Vec<Duration>>>,
}

impl SignalAfter {
    pub fn new(preempt: Arc<PreemptSignal>, sleeps: usize) -> Self {
        Self {
            preempt,
            remaining: AtomicUsize::new(sleeps),
            durations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the recorded sleep durations.
    pub fn durations(&self) -> Arc<Mutex<Vec<Duration>>> {
        Arc::clone(&self.durations)
    }
}

impl Sleeper for SignalAfter {
    fn sleep(&self, duration: Duration) {
        self.durations.lock().unwrap().push(duration);

        let remaining = self.remaining.load(Ordering::Relaxed);
        if remaining > 0 {
            self.remaining.store(remaining - 1, Ordering::Relaxed);
            if remaining == 1 {
                self.preempt.signal();
            }
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Total channel intensity of a flushed frame.
pub fn intensity(frame: &NativeFrame) -> u32 {
    frame
        .iter()
        .map(|c| c.red as u32 + c.green as u32 + c.blue as u32)
        .sum()
}

pub fn is_dark(frame: &NativeFrame) -> bool {
    intensity(frame) == 0
}

pub fn frames_equal(a: &Frame, b: &Frame) -> bool {
    const EPSILON: f32 = 0.001;
    a.iter().zip(b.iter()).all(|(x, y)| {
        (x.red - y.red).abs() < EPSILON
            && (x.green - y.green).abs() < EPSILON
            && (x.blue - y.blue).abs() < EPSILON
    })
}
