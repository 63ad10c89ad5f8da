// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel alignment and grid rounding.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Half of one device pixel in layout units at 100% zoom.
pub const HALF_A_PIXEL: f64 = 0.5;

/// Moves a position onto the center of a pixel.
///
/// A 1px stroke drawn at this coordinate covers exactly one pixel column/row.
#[must_use]
pub fn move_on_pixel(position: f64) -> f64 {
    position.ceil() + HALF_A_PIXEL
}

/// Moves a position off the center of a pixel, onto the pixel boundary before it.
#[must_use]
pub fn move_off_pixel(position: f64) -> f64 {
    position.ceil() - HALF_A_PIXEL
}

/// Rounds `value` to the nearest multiple of `spacing`.
///
/// A non-positive or non-finite `spacing` leaves `value` unchanged.
#[must_use]
pub fn round_to_grid(value: f64, spacing: f64) -> f64 {
    if !(spacing.is_finite() && spacing > 0.0) {
        return value;
    }
    (value / spacing).round() * spacing
}
