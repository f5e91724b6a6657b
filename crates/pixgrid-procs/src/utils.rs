/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ops::Range;

/// Return the rows and columns of the 3x3 window centered at `(x, y)`
/// that lie inside a `width` x `height` grid, as `(rows, columns)`.
///
/// Corners give a 2x2 window, edges a 2x3 or 3x2 window.
///
/// # Panics
/// In debug builds, if `(x, y)` is outside the grid
#[inline]
#[must_use]
pub fn neighborhood(
    x: usize, y: usize, width: usize, height: usize
) -> (Range<usize>, Range<usize>) {
    debug_assert!(x < width && y < height);

    let rows = y.saturating_sub(1)..(y + 2).min(height);
    let columns = x.saturating_sub(1)..(x + 2).min(width);

    (rows, columns)
}

/// Round to the nearest integer, halfway cases away from zero,
/// and saturate to the range of a u8
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_to_u8(value: f64) -> u8 {
    // `as` saturates for floats
    value.round() as u8
}

/// Combine a horizontal and vertical gradient into a single
/// channel value
///
/// Computes `round(sqrt(gx² + gy²))`, clamped to 255
#[inline]
#[must_use]
pub fn magnitude(gx: i32, gy: i32) -> u8 {
    let gx = f64::from(gx);
    let gy = f64::from(gy);

    round_to_u8(((gx * gx) + (gy * gy)).sqrt().min(255.0))
}
