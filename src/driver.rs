//! Hardware abstraction for the LED ring.

use palette::Srgb;

/// Trait for abstracting addressable RGB ring hardware.
///
/// Implement this for your LED driver (SPI, PWM, shift register, ...). The
/// library computes in `Srgb<f32>`; implementations receive device-native
/// `Srgb<u8>` values, already clamped to the `0..=255` channel range.
///
/// Both operations may fail. Errors are reported through the crate's `log`
/// output and the offending frame is dropped; the animation worker keeps
/// running.
pub trait RingDriver {
    /// Driver-specific error type.
    type Error: core::fmt::Display;

    /// Stages the color of a single ring element.
    ///
    /// `index` is in `0..RING_LEDS`. The value takes effect on the next
    /// [`show`](RingDriver::show).
    fn set_pixel(&mut self, index: usize, color: Srgb<u8>) -> Result<(), Self::Error>;

    /// Flushes all staged pixel values to the hardware.
    fn show(&mut self) -> Result<(), Self::Error>;
}

/// Converts a computed color to the device-native 8-bit form.
///
/// Channels are truncated toward zero and clamped to `0..=255`; upstream
/// scaling is not guaranteed to stay in range.
pub fn to_native(color: Srgb) -> Srgb<u8> {
    Srgb::new(
        native_channel(color.red),
        native_channel(color.green),
        native_channel(color.blue),
    )
}

fn native_channel(value: f32) -> u8 {
    (value as i32).clamp(0, 255) as u8
}
