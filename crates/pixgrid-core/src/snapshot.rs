/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Read-only copies of a grid
//!
//! Neighborhood filters write a pixel using the values of the pixels
//! around it, so they read from a snapshot taken before the first write
//! instead of from the grid they are overwriting.
use log::{error, trace};

use crate::errors::GridErrors;
use crate::grid::Grid;
use crate::options::FilterOptions;
use crate::pixel::Rgb;

/// An owned, read-only copy of a grid's pixels
///
/// The snapshot does not borrow the grid it was taken from,
/// the grid can be mutated freely while the snapshot is alive.
#[derive(Clone, Debug)]
pub struct Snapshot {
    width:  usize,
    height: usize,
    pixels: Box<[Rgb]>
}

impl Snapshot {
    /// Copy the pixels of `grid`
    ///
    /// Allocation is fallible, the request is checked against
    /// `options.max_snapshot_bytes()` first and then handed to the
    /// allocator via `try_reserve_exact`.
    ///
    /// # Errors
    /// `AllocationFailure` with the number of bytes requested.
    /// `grid` is not modified in either case.
    pub fn take(grid: &Grid, options: &FilterOptions) -> Result<Snapshot, GridErrors> {
        let (width, height) = grid.dimensions();
        let source = grid.pixels();

        let bytes = source
            .len()
            .checked_mul(core::mem::size_of::<Rgb>())
            .ok_or(GridErrors::DimensionsOverflow(width, height))?;

        if bytes > options.max_snapshot_bytes() {
            error!(
                "Not enough memory to copy a {width}x{height} grid, {bytes} bytes needed but limit is {}",
                options.max_snapshot_bytes()
            );
            return Err(GridErrors::AllocationFailure(bytes));
        }

        let mut pixels = Vec::new();

        if pixels.try_reserve_exact(source.len()).is_err() {
            error!("Not enough memory to copy a {width}x{height} grid, allocation of {bytes} bytes failed");
            return Err(GridErrors::AllocationFailure(bytes));
        }
        pixels.extend_from_slice(source);

        trace!("Took a {width}x{height} snapshot ({bytes} bytes)");

        Ok(Snapshot {
            width,
            height,
            pixels: pixels.into_boxed_slice()
        })
    }

    /// Return the dimensions as `(width, height)`
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Return the pixel at column `x`, row `y` or `None` if out of bounds
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x)
    }

    /// Return the pixel at column `x`, row `y`
    ///
    /// # Panics
    /// If the position is outside the snapshot
    #[must_use]
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        assert!(x < self.width && y < self.height, "({x},{y}) out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Return row `y`
    ///
    /// # Panics
    /// If `y` is not less than the height
    #[must_use]
    pub fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Return all pixels in row-major order
    #[must_use]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}
