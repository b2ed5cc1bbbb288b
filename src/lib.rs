#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`RingAnimator`**: Non-blocking command handle backed by a dedicated worker thread
//! - **`AnimationRequest`**: One queued animation (wakeup, listen, think, speak, off)
//! - **`AnimationEngine`**: Executes animations synchronously against a driver
//! - **`PreemptSignal`**: Cooperative cancellation flag for the indefinite animations
//! - **`RingDriver`**: Trait to implement for your LED ring hardware
//! - **`Sleeper`**: Trait to implement for your timing system
//!
//! The library uses `Srgb<f32>` for all frame math, with components carrying
//! raw intensity units (ramps peak at 24). Values are converted to device-native
//! `Srgb<u8>`, truncated and clamped to `0..=255`, before they reach a
//! [`RingDriver`] implementation.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod time;
pub mod color;
pub mod command;
pub mod driver;
pub mod preempt;
pub mod engine;
pub mod animator;

pub use animator::RingAnimator;
pub use color::{BASIS, FRAME_OFF, Frame, RING_LEDS, rotated_left, scaled, sector_offset};
pub use command::AnimationRequest;
pub use driver::{RingDriver, to_native};
pub use engine::AnimationEngine;
pub use preempt::PreemptSignal;
pub use time::{Sleeper, ThreadSleeper};

pub const COLOR_OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);
