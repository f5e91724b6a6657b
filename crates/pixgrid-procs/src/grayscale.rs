/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Grayscale: replace every channel by the average of the three
use pixgrid_core::errors::GridErrors;
use pixgrid_core::grid::Grid;
use pixgrid_core::pixel::Rgb;

use crate::traits::OperationsTrait;
use crate::utils::round_to_u8;

/// Convert a grid to grayscale
///
/// Each pixel becomes `R = G = B = round((R + G + B) / 3)`,
/// an unweighted average rather than a luma transform.
///
/// This operation cannot fail.
#[derive(Default, Copy, Clone)]
pub struct Grayscale;

impl Grayscale {
    #[must_use]
    pub fn new() -> Grayscale {
        Self
    }
}

impl OperationsTrait for Grayscale {
    fn name(&self) -> &'static str {
        "Grayscale"
    }

    fn execute_impl(&self, grid: &mut Grid) -> Result<(), GridErrors> {
        grayscale(grid);
        Ok(())
    }
}

/// Convert `grid` to grayscale in place
pub fn grayscale(grid: &mut Grid) {
    grayscale_pixels(grid.pixels_mut());
}

/// Convert pixels to grayscale in place
pub fn grayscale_pixels(pixels: &mut [Rgb]) {
    for pixel in pixels {
        *pixel = Rgb::gray(average(*pixel));
    }
}

/// Average of the three channels, rounded half away from zero
#[inline]
fn average(pixel: Rgb) -> u8 {
    let sum = u32::from(pixel.r) + u32::from(pixel.g) + u32::from(pixel.b);

    round_to_u8(f64::from(sum) / 3.0)
}
