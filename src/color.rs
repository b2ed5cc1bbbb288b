//! Pure color and frame math for the light ring.
//!
//! A [`Frame`] is one instant of per-element color. Components carry raw
//! intensity units (ramps peak at 24); conversion to the device channel range
//! happens at the driver boundary, see [`crate::driver::to_native`].

use crate::COLOR_OFF;
use palette::Srgb;

/// Number of elements on the ring.
pub const RING_LEDS: usize = 3;

/// One rendered instant: a color per ring element.
pub type Frame = [Srgb; RING_LEDS];

/// Canonical unit-intensity pattern: element `i` lit in channel `i`.
pub const BASIS: Frame = [
    Srgb::new(1.0, 0.0, 0.0),
    Srgb::new(0.0, 1.0, 0.0),
    Srgb::new(0.0, 0.0, 1.0),
];

/// All elements dark.
pub const FRAME_OFF: Frame = [COLOR_OFF; RING_LEDS];

/// Buckets a direction angle (degrees) into one of the ring's rotation
/// offsets.
///
/// The 3-element ring has 3-fold rotational symmetry, so directions fall into
/// 60-degree sectors within a 180-degree range and the mapping is periodic
/// with period 180. The euclidean remainder keeps negative angles in the
/// correct sector.
pub fn sector_offset(direction: f32) -> usize {
    ((direction + 210.0).rem_euclid(180.0) / 60.0) as usize
}

/// Returns `frame` rotated circularly left by `elements` ring positions.
pub fn rotated_left(frame: Frame, elements: usize) -> Frame {
    let mut rotated = frame;
    rotated.rotate_left(elements % RING_LEDS);
    rotated
}

/// Returns `frame` with every channel multiplied by `factor`.
pub fn scaled(frame: Frame, factor: f32) -> Frame {
    frame.map(|color| {
        Srgb::new(
            color.red * factor,
            color.green * factor,
            color.blue * factor,
        )
    })
}
