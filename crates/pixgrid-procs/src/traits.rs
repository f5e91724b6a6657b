/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits shared by all filters
use std::time::Instant;

use log::Level::Trace;
use log::{log_enabled, trace};
use pixgrid_core::errors::GridErrors;
use pixgrid_core::grid::Grid;

/// An operation that modifies a grid in place
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation on the grid
    ///
    /// This is called by [`execute`](Self::execute), which has already
    /// filtered out grids with no pixels.
    ///
    /// # Errors
    /// Any operation error is propagated to the caller.
    /// An operation that fails must leave the grid as it found it.
    fn execute_impl(&self, grid: &mut Grid) -> Result<(), GridErrors>;

    /// Execute the operation on the grid
    ///
    /// Grids with zero width or height are returned untouched.
    ///
    /// # Errors
    /// Errors from [`execute_impl`](Self::execute_impl)
    ///
    /// # Example
    /// ```
    /// use pixgrid_core::grid::Grid;
    /// use pixgrid_core::pixel::Rgb;
    /// use pixgrid_procs::grayscale::Grayscale;
    /// use pixgrid_procs::traits::OperationsTrait;
    ///
    /// let mut grid = Grid::fill(Rgb::new(10, 20, 30), 2, 2);
    /// Grayscale::new().execute(&mut grid).unwrap();
    ///
    /// assert!(grid.pixels().iter().all(|p| *p == Rgb::gray(20)));
    /// ```
    fn execute(&self, grid: &mut Grid) -> Result<(), GridErrors> {
        let (width, height) = grid.dimensions();

        if grid.is_empty() {
            trace!("Skipping {} on empty {width}x{height} grid", self.name());
            return Ok(());
        }
        let start = Instant::now();

        self.execute_impl(grid)?;

        if log_enabled!(Trace) {
            trace!(
                "Finished {} on {width}x{height} grid in {} ms",
                self.name(),
                start.elapsed().as_millis()
            );
        }
        Ok(())
    }

    /// Run the operation on a copy of `grid`, returning the copy
    ///
    /// # Errors
    /// Errors from [`execute`](Self::execute)
    fn clone_and_execute(&self, grid: &Grid) -> Result<Grid, GridErrors> {
        let mut copy = grid.clone();
        self.execute(&mut copy)?;
        Ok(copy)
    }
}
