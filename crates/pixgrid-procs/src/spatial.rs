/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Spatial operations on grids
//!
//! A spatial operation computes every output pixel from the 3x3 window
//! of input pixels around it.
//!
//! Since outputs overwrite the very pixels later windows read, the input is
//! a [`Snapshot`] taken before the first write, and the live grid is only
//! ever written to.
use log::trace;
use pixgrid_core::errors::GridErrors;
use pixgrid_core::grid::Grid;
use pixgrid_core::options::FilterOptions;
use pixgrid_core::pixel::Rgb;
use pixgrid_core::snapshot::Snapshot;

/// Run a 3x3 spatial operation over the whole grid
///
/// `func` receives the snapshot and the `(x, y)` position being written
/// and returns the new pixel for that position.
///
/// With the `threads` feature and `options.use_multithreading()` the grid is
/// split into bands of whole rows, one per thread. Every band reads the same
/// snapshot, so results do not depend on the number of threads.
///
/// # Errors
/// `AllocationFailure` if the snapshot cannot be taken, the grid is
/// then left untouched.
pub fn spatial_3x3<F>(
    grid: &mut Grid, options: &FilterOptions, name: &str, func: F
) -> Result<(), GridErrors>
where
    F: Fn(&Snapshot, usize, usize) -> Rgb + Sync
{
    if grid.is_empty() {
        return Ok(());
    }
    let snapshot = grid.snapshot(options)?;

    #[cfg(feature = "threads")]
    {
        let (width, height) = snapshot.dimensions();
        let threads = std::thread::available_parallelism()
            .map_or(1, std::num::NonZeroUsize::get)
            .min(height);

        if options.use_multithreading() && threads > 1 {
            trace!("Running {name} in multithreaded mode with {threads} threads");

            let rows_per_band = height.div_ceil(threads);
            let snapshot = &snapshot;
            let func = &func;

            std::thread::scope(|s| {
                for (band, out) in grid
                    .pixels_mut()
                    .chunks_mut(rows_per_band * width)
                    .enumerate()
                {
                    s.spawn(move || write_rows(snapshot, out, band * rows_per_band, func));
                }
            });
            return Ok(());
        }
    }

    trace!("Running {name} in single threaded mode");
    write_rows(&snapshot, grid.pixels_mut(), 0, &func);

    Ok(())
}

/// Write whole rows starting at row `first_row` of the grid
fn write_rows<F>(snapshot: &Snapshot, out: &mut [Rgb], first_row: usize, func: &F)
where
    F: Fn(&Snapshot, usize, usize) -> Rgb
{
    let (width, _) = snapshot.dimensions();

    for (offset, row) in out.chunks_exact_mut(width).enumerate() {
        let y = first_row + offset;

        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = func(snapshot, x, y);
        }
    }
}
