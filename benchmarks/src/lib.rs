/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use pixgrid_core::grid::Grid;

/// Width and height of the benchmark grid
pub const BENCH_DIMENSIONS: (usize, usize) = (800, 800);

/// A grid of random pixels, the same for every run
pub fn bench_grid() -> Grid {
    let (width, height) = BENCH_DIMENSIONS;
    let mut bytes = vec![0_u8; width * height * 3];

    WyRand::new_seed(800).fill(&mut bytes);

    Grid::from_u8(&bytes, width, height).unwrap()
}
