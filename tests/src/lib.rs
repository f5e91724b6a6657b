/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Property tests for the pixgrid filters, run over seeded random grids
use nanorand::{Rng, WyRand};
use pixgrid_core::grid::Grid;
use pixgrid_core::options::FilterOptions;
use pixgrid_procs::box_blur::BoxBlur;
use pixgrid_procs::grayscale::Grayscale;
use pixgrid_procs::reflect::Reflect;
use pixgrid_procs::sobel::Sobel;
use pixgrid_procs::traits::OperationsTrait;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod scenarios;

/// Seed shared by every test so failures reproduce
pub const SEED: u64 = 0x5EED_1234;

/// Dimensions exercised by property tests,
/// including degenerate and odd sizes
pub const DIMENSIONS: &[(usize, usize)] = &[
    (0, 0),
    (0, 4),
    (4, 0),
    (1, 1),
    (1, 7),
    (7, 1),
    (2, 2),
    (3, 3),
    (5, 4),
    (16, 9),
    (33, 17)
];

/// Create a grid filled with random bytes
pub fn random_grid(rng: &mut WyRand, width: usize, height: usize) -> Grid {
    let mut bytes = vec![0_u8; width * height * 3];
    rng.fill(&mut bytes);

    // length always matches, dimensions are small
    Grid::from_u8(&bytes, width, height).unwrap()
}

/// Every filter, in a fixed order
pub fn all_operations(options: FilterOptions) -> Vec<Box<dyn OperationsTrait>> {
    vec![
        Box::new(Grayscale::new()),
        Box::new(Reflect::new()),
        Box::new(BoxBlur::new_with_options(options)),
        Box::new(Sobel::new_with_options(options))
    ]
}
