/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sobel edge detection
use pixgrid_core::errors::GridErrors;
use pixgrid_core::grid::Grid;
use pixgrid_core::options::FilterOptions;
use pixgrid_core::pixel::Rgb;
use pixgrid_core::snapshot::Snapshot;

use crate::spatial::spatial_3x3;
use crate::traits::OperationsTrait;
use crate::utils::{magnitude, neighborhood};

/// Horizontal gradient kernel, indexed `[row][column]`
#[rustfmt::skip]
pub const GX: [[i32; 3]; 3] = [
    [-1, 0, 1],
    [-2, 0, 2],
    [-1, 0, 1]
];

/// Vertical gradient kernel, indexed `[row][column]`
#[rustfmt::skip]
pub const GY: [[i32; 3]; 3] = [
    [-1, -2, -1],
    [ 0,  0,  0],
    [ 1,  2,  1]
];

/// Perform sobel edge detection.
///
/// This operation calculates the gradient of each channel,
/// which represents how quickly values change from
/// one pixel to the next in both the horizontal and vertical directions.
/// The output channel is the gradient magnitude, clamped to 255.
///
/// The matrix for sobel is
///
/// Gx matrix
/// ```text
///   -1, 0, 1,
///   -2, 0, 2,
///   -1, 0, 1
/// ```
/// Gy matrix
/// ```text
/// -1,-2,-1,
///  0, 0, 0,
///  1, 2, 1
/// ```
///
/// The window is a 3x3 window. Kernel cells that fall outside the grid
/// are left out of the sums.
///
/// This operation is multithreaded capable
#[derive(Default, Copy, Clone)]
pub struct Sobel {
    options: FilterOptions
}

impl Sobel {
    #[must_use]
    pub fn new() -> Sobel {
        Sobel::default()
    }

    #[must_use]
    pub fn new_with_options(options: FilterOptions) -> Sobel {
        Sobel { options }
    }
}

impl OperationsTrait for Sobel {
    fn name(&self) -> &'static str {
        "Sobel"
    }

    fn execute_impl(&self, grid: &mut Grid) -> Result<(), GridErrors> {
        edge_detect_with_options(grid, &self.options)
    }
}

/// Detect edges in `grid` in place using default options
///
/// # Errors
/// `AllocationFailure` if a copy of the grid cannot be made,
/// the grid is then left untouched.
pub fn edge_detect(grid: &mut Grid) -> Result<(), GridErrors> {
    edge_detect_with_options(grid, &FilterOptions::default())
}

/// Detect edges in `grid` in place
///
/// # Errors
/// `AllocationFailure` if a copy of the grid cannot be made,
/// the grid is then left untouched.
pub fn edge_detect_with_options(
    grid: &mut Grid, options: &FilterOptions
) -> Result<(), GridErrors> {
    spatial_3x3(grid, options, "sobel", sobel_at)
}

fn sobel_at(snapshot: &Snapshot, x: usize, y: usize) -> Rgb {
    let (width, height) = snapshot.dimensions();
    let (rows, columns) = neighborhood(x, y, width, height);

    let mut gx = [0_i32; 3];
    let mut gy = [0_i32; 3];

    for row in rows {
        // row + 1 - y is the kernel row, in 0..3
        let (kx_row, ky_row) = (&GX[row + 1 - y], &GY[row + 1 - y]);

        for column in columns.clone() {
            let k = column + 1 - x;
            let channels = snapshot.pixel(column, row).channels();

            for ((c, sum_x), sum_y) in channels.iter().zip(&mut gx).zip(&mut gy) {
                *sum_x += i32::from(*c) * kx_row[k];
                *sum_y += i32::from(*c) * ky_row[k];
            }
        }
    }

    Rgb::new(
        magnitude(gx[0], gy[0]),
        magnitude(gx[1], gy[1]),
        magnitude(gx[2], gy[2])
    )
}
