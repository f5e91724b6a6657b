/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Box blur filter
use pixgrid_core::errors::GridErrors;
use pixgrid_core::grid::Grid;
use pixgrid_core::options::FilterOptions;
use pixgrid_core::pixel::Rgb;
use pixgrid_core::snapshot::Snapshot;

use crate::spatial::spatial_3x3;
use crate::traits::OperationsTrait;
use crate::utils::{neighborhood, round_to_u8};

/// Perform a 3x3 box blur
///
/// Every pixel becomes the per-channel average of the 3x3 window
/// centered on it. Windows are not padded, pixels on edges and corners
/// average over the 6 or 4 neighbors that exist.
///
/// This operation is multithreaded capable
#[derive(Default, Copy, Clone)]
pub struct BoxBlur {
    options: FilterOptions
}

impl BoxBlur {
    /// Create a new blur operation with default options
    #[must_use]
    pub fn new() -> BoxBlur {
        BoxBlur::default()
    }

    /// Create a new blur operation
    ///
    /// # Arguments
    /// - options: Snapshot limit and threading preferences
    #[must_use]
    pub fn new_with_options(options: FilterOptions) -> BoxBlur {
        BoxBlur { options }
    }
}

impl OperationsTrait for BoxBlur {
    fn name(&self) -> &'static str {
        "Box blur"
    }

    fn execute_impl(&self, grid: &mut Grid) -> Result<(), GridErrors> {
        blur_with_options(grid, &self.options)
    }
}

/// Blur `grid` in place using default options
///
/// # Errors
/// `AllocationFailure` if a copy of the grid cannot be made,
/// the grid is then left untouched.
pub fn blur(grid: &mut Grid) -> Result<(), GridErrors> {
    blur_with_options(grid, &FilterOptions::default())
}

/// Blur `grid` in place
///
/// # Errors
/// `AllocationFailure` if a copy of the grid cannot be made,
/// the grid is then left untouched.
pub fn blur_with_options(grid: &mut Grid, options: &FilterOptions) -> Result<(), GridErrors> {
    spatial_3x3(grid, options, "box blur", box_blur_at)
}

/// Average of the in-bounds 3x3 window around `(x, y)`
fn box_blur_at(snapshot: &Snapshot, x: usize, y: usize) -> Rgb {
    let (width, height) = snapshot.dimensions();
    let (rows, columns) = neighborhood(x, y, width, height);

    let mut sum = [0_u32; 3];
    let mut count = 0_u32;

    for row in rows {
        for pixel in &snapshot.row(row)[columns.clone()] {
            sum[0] += u32::from(pixel.r);
            sum[1] += u32::from(pixel.g);
            sum[2] += u32::from(pixel.b);
            count += 1;
        }
    }
    let count = f64::from(count);

    Rgb::from_channels(sum.map(|s| round_to_u8(f64::from(s) / count)))
}
