/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::WyRand;
use pixgrid_core::errors::GridErrors;
use pixgrid_core::grid::Grid;
use pixgrid_core::options::FilterOptions;
use pixgrid_core::pixel::Rgb;
use pixgrid_procs::box_blur::{blur, BoxBlur};
use pixgrid_procs::grayscale::grayscale;
use pixgrid_procs::reflect::reflect;
use pixgrid_procs::sobel::Sobel;
use pixgrid_procs::traits::OperationsTrait;

use crate::{all_operations, random_grid, SEED};

#[test]
fn checkerboard_is_already_gray() {
    let mut grid = Grid::from_pixels(
        2,
        2,
        vec![Rgb::WHITE, Rgb::BLACK, Rgb::BLACK, Rgb::WHITE]
    )
    .unwrap();
    let before = grid.clone();

    grayscale(&mut grid);

    assert_eq!(grid, before);
}

#[test]
fn single_row_reflects() {
    let mut grid = Grid::from_u8(&[10, 20, 30, 40, 50, 60, 70, 80, 90], 3, 1).unwrap();

    reflect(&mut grid);

    assert_eq!(grid.as_bytes(), &[70, 80, 90, 40, 50, 60, 10, 20, 30]);
}

#[test]
fn black_grid_blurs_to_black() {
    let mut grid = Grid::new(3, 3);

    blur(&mut grid).unwrap();

    assert_eq!(grid, Grid::new(3, 3));
}

#[test]
fn one_pixel_blurs_to_itself() {
    let mut rng = WyRand::new_seed(SEED);

    for _ in 0..16 {
        let grid = random_grid(&mut rng, 1, 1);
        let mut out = grid.clone();

        blur(&mut out).unwrap();

        assert_eq!(out, grid);
    }
}

#[test]
fn failed_snapshot_leaves_grid_bit_identical() {
    let mut rng = WyRand::new_seed(SEED);
    let mut grid = random_grid(&mut rng, 8, 8);
    let before = grid.as_bytes().to_vec();

    let options = FilterOptions::default().set_max_snapshot_bytes(8 * 8 * 3 - 1);

    for operation in [
        Box::new(BoxBlur::new_with_options(options)) as Box<dyn OperationsTrait>,
        Box::new(Sobel::new_with_options(options))
    ] {
        let err = operation.execute(&mut grid).unwrap_err();

        assert!(matches!(err, GridErrors::AllocationFailure(192)));
        assert_eq!(grid.as_bytes(), &before[..], "{} touched the grid", operation.name());
    }
}

#[test]
fn empty_grids_never_fail() {
    // even with no room for a snapshot
    let options = FilterOptions::default().set_max_snapshot_bytes(0);

    for (width, height) in [(0, 0), (0, 9), (9, 0)] {
        for operation in all_operations(options) {
            let mut grid = Grid::new(width, height);

            operation.execute(&mut grid).unwrap();
            assert_eq!(grid.dimensions(), (width, height));
        }
    }
}

#[test]
fn sharp_vertical_edge() {
    // left half black, right half white
    let mut grid = Grid::from_fn(6, 5, |x, _| if x < 3 { Rgb::BLACK } else { Rgb::WHITE });

    Sobel::new().execute(&mut grid).unwrap();

    for y in 1..4 {
        // columns either side of the edge see a full gradient of 4*255
        assert_eq!(grid.get(2, y), Some(&Rgb::WHITE));
        assert_eq!(grid.get(3, y), Some(&Rgb::WHITE));
        // flat areas cancel
        assert_eq!(grid.get(1, y), Some(&Rgb::BLACK));
        assert_eq!(grid.get(4, y), Some(&Rgb::BLACK));
    }
}
