// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel ⇄ percentage conversion against a container extent.
//!
//! These are the only two unit primitives in the crate; everything else composes them.
//! Neither function clamps or rounds: a negative pixel count yields a negative
//! percentage, and a percentage above 100 yields more pixels than the extent.

/// Convert `pixels` to a percentage of `extent`.
///
/// Returns `0` when `extent` is `0` (for example before the container has been measured).
///
/// ```
/// use understory_split::units::pixels_to_percentage;
/// assert_eq!(pixels_to_percentage(400.0, 100.0), 25.0);
/// assert_eq!(pixels_to_percentage(0.0, 100.0), 0.0);
/// assert_eq!(pixels_to_percentage(400.0, -40.0), -10.0);
/// ```
#[inline]
pub fn pixels_to_percentage(extent: f64, pixels: f64) -> f64 {
    if extent == 0.0 {
        0.0
    } else {
        pixels / extent * 100.0
    }
}

/// Convert `percentage` of `extent` to pixels.
///
/// ```
/// use understory_split::units::percentage_to_pixels;
/// assert_eq!(percentage_to_pixels(400.0, 25.0), 100.0);
/// assert_eq!(percentage_to_pixels(400.0, 150.0), 600.0);
/// ```
#[inline]
pub fn percentage_to_pixels(extent: f64, percentage: f64) -> f64 {
    extent * (percentage / 100.0)
}

/// Clamp without panicking on NaN bounds or `lo > hi`.
///
/// `f64::clamp` asserts `lo <= hi`; configuration is not validated, so the
/// engine uses this instead. When `lo > hi` the upper bound wins.
#[inline]
pub(crate) fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}
