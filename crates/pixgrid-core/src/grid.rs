/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a grid of pixels
//!
//! A grid is represented as
//!
//! - a contiguous, row-major buffer of [`Rgb`] pixels
//!     - with a fixed width and height
//!
//! Filters change pixel values but never the dimensions,
//! a grid keeps the buffer it was created with for its whole lifetime.
use crate::errors::GridErrors;
use crate::options::FilterOptions;
use crate::pixel::{Rgb, RGB_CHANNELS};
use crate::snapshot::Snapshot;

/// A rectangular grid of RGB pixels
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Grid {
    width:  usize,
    height: usize,
    pixels: Vec<Rgb>
}

impl Grid {
    /// Create a black grid
    ///
    /// # Panics
    /// If `width * height` overflows a usize
    #[must_use]
    pub fn new(width: usize, height: usize) -> Grid {
        Grid::fill(Rgb::BLACK, width, height)
    }

    /// Create a grid where every pixel is `pixel`
    ///
    /// # Panics
    /// If `width * height` overflows a usize
    #[must_use]
    pub fn fill(pixel: Rgb, width: usize, height: usize) -> Grid {
        let size = checked_area(width, height).unwrap();

        Grid {
            width,
            height,
            pixels: vec![pixel; size]
        }
    }

    /// Create a grid from a function called once per pixel
    ///
    /// The function receives the `(x, y)` coordinates of the pixel,
    /// pixels are visited in row-major order
    ///
    /// # Example
    /// ```
    /// use pixgrid_core::grid::Grid;
    /// use pixgrid_core::pixel::Rgb;
    ///
    /// // a horizontal ramp
    /// let grid = Grid::from_fn(256, 1, |x, _| Rgb::gray(x as u8));
    /// assert_eq!(grid.get(255, 0), Some(&Rgb::WHITE));
    /// ```
    ///
    /// # Panics
    /// If `width * height` overflows a usize
    pub fn from_fn<F>(width: usize, height: usize, func: F) -> Grid
    where
        F: Fn(usize, usize) -> Rgb
    {
        let size = checked_area(width, height).unwrap();
        let mut pixels = Vec::with_capacity(size);

        for y in 0..height {
            for x in 0..width {
                pixels.push((func)(x, y));
            }
        }
        Grid {
            width,
            height,
            pixels
        }
    }

    /// Create a grid from row-major pixels
    ///
    /// # Errors
    /// - `DimensionsOverflow` if `width * height` overflows a usize
    /// - `DimensionsMisMatch` if `pixels.len()` is not `width * height`
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Grid, GridErrors> {
        let expected = checked_area(width, height)?;

        if pixels.len() != expected {
            return Err(GridErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        Ok(Grid {
            width,
            height,
            pixels
        })
    }

    /// Create a grid from interleaved `[R,G,B,R,G,B]` bytes
    ///
    /// # Errors
    /// - `DimensionsOverflow` if the expected byte length overflows a usize
    /// - `DimensionsMisMatch` if `bytes.len()` is not `width * height * 3`
    pub fn from_u8(bytes: &[u8], width: usize, height: usize) -> Result<Grid, GridErrors> {
        let expected = checked_area(width, height)?
            .checked_mul(RGB_CHANNELS)
            .ok_or(GridErrors::DimensionsOverflow(width, height))?;

        if bytes.len() != expected {
            return Err(GridErrors::DimensionsMisMatch(expected, bytes.len()));
        }
        let pixels = bytes
            .chunks_exact(RGB_CHANNELS)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();

        Ok(Grid {
            width,
            height,
            pixels
        })
    }

    /// Return the grid dimensions as `(width, height)`
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return true if the grid has no pixels,
    /// i.e. either dimension is zero
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Return the pixel at column `x`, row `y` or `None` if
    /// the position is outside the grid
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x)
    }

    /// Mutable version of [`get`](Self::get)
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get_mut(y * self.width + x)
    }

    /// Return all pixels in row-major order
    #[must_use]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Return all pixels in row-major order
    ///
    /// The returned slice cannot be resized, hence the grid
    /// dimensions stay valid
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Iterate over the rows of the grid, top to bottom
    ///
    /// Yields nothing for a grid with zero width
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        // chunks_exact panics on zero sized chunks
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// Iterate mutably over the rows of the grid, top to bottom
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Rgb]> {
        self.pixels.chunks_exact_mut(self.width.max(1))
    }

    /// View the pixels as interleaved `[R,G,B,R,G,B]` bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Consume the grid returning its pixels
    #[must_use]
    pub fn into_pixels(self) -> Vec<Rgb> {
        self.pixels
    }

    /// Take a read-only copy of the current pixels
    ///
    /// # Errors
    /// `AllocationFailure` if the copy is larger than
    /// `options.max_snapshot_bytes()` or the allocator refuses it.
    /// The grid is never modified.
    pub fn snapshot(&self, options: &FilterOptions) -> Result<Snapshot, GridErrors> {
        Snapshot::take(self, options)
    }
}

fn checked_area(width: usize, height: usize) -> Result<usize, GridErrors> {
    width
        .checked_mul(height)
        .ok_or(GridErrors::DimensionsOverflow(width, height))
}
