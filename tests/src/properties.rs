/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::WyRand;
use pixgrid_core::grid::Grid;
use pixgrid_core::options::FilterOptions;
use pixgrid_core::pixel::Rgb;
use pixgrid_procs::box_blur::BoxBlur;
use pixgrid_procs::grayscale::{grayscale, Grayscale};
use pixgrid_procs::reflect::{reflect, Reflect};
use pixgrid_procs::sobel::Sobel;
use pixgrid_procs::traits::OperationsTrait;

use crate::{all_operations, random_grid, DIMENSIONS, SEED};

#[test]
fn filters_preserve_dimensions() {
    let mut rng = WyRand::new_seed(SEED);

    for &(width, height) in DIMENSIONS {
        let grid = random_grid(&mut rng, width, height);

        for operation in all_operations(FilterOptions::default()) {
            let out = operation.clone_and_execute(&grid).unwrap();

            assert_eq!(
                out.dimensions(),
                (width, height),
                "{} changed dimensions",
                operation.name()
            );
            assert_eq!(out.pixels().len(), width * height);
        }
    }
}

#[test]
fn grayscale_is_idempotent() {
    let mut rng = WyRand::new_seed(SEED);

    for &(width, height) in DIMENSIONS {
        let grid = random_grid(&mut rng, width, height);

        let once = Grayscale::new().clone_and_execute(&grid).unwrap();
        let twice = Grayscale::new().clone_and_execute(&once).unwrap();

        assert_eq!(once, twice);
        assert!(once.pixels().iter().all(|p| p.is_gray()));
    }
}

#[test]
fn reflect_is_an_involution() {
    let mut rng = WyRand::new_seed(SEED);

    for &(width, height) in DIMENSIONS {
        let grid = random_grid(&mut rng, width, height);
        let mut copy = grid.clone();

        reflect(&mut copy);
        reflect(&mut copy);

        assert_eq!(copy, grid, "{width}x{height}");
    }
}

#[test]
fn reflect_keeps_center_column_of_odd_widths() {
    let mut rng = WyRand::new_seed(SEED);

    for &(width, height) in DIMENSIONS.iter().filter(|(w, _)| w % 2 == 1) {
        let grid = random_grid(&mut rng, width, height);
        let out = Reflect::new().clone_and_execute(&grid).unwrap();
        let center = width / 2;

        for y in 0..height {
            assert_eq!(out.get(center, y), grid.get(center, y));
        }
    }
}

#[test]
fn reflect_mirrors_every_column() {
    let mut rng = WyRand::new_seed(SEED);
    let grid = random_grid(&mut rng, 10, 6);
    let out = Reflect::new().clone_and_execute(&grid).unwrap();

    for y in 0..6 {
        for x in 0..10 {
            assert_eq!(out.get(x, y), grid.get(9 - x, y));
        }
    }
}

#[test]
fn threads_do_not_change_results() {
    let mut rng = WyRand::new_seed(SEED);
    let threaded = FilterOptions::default().set_use_multithreading(true);
    let single = FilterOptions::new_single_threaded();

    for &(width, height) in DIMENSIONS {
        let grid = random_grid(&mut rng, width, height);

        let a = BoxBlur::new_with_options(threaded).clone_and_execute(&grid).unwrap();
        let b = BoxBlur::new_with_options(single).clone_and_execute(&grid).unwrap();
        assert_eq!(a, b, "box blur {width}x{height}");

        let a = Sobel::new_with_options(threaded).clone_and_execute(&grid).unwrap();
        let b = Sobel::new_with_options(single).clone_and_execute(&grid).unwrap();
        assert_eq!(a, b, "sobel {width}x{height}");
    }
}

#[test]
fn blur_stays_within_neighborhood_extremes() {
    let mut rng = WyRand::new_seed(SEED);
    let grid = random_grid(&mut rng, 16, 9);
    let out = BoxBlur::new().clone_and_execute(&grid).unwrap();

    for y in 0..9_usize {
        for x in 0..16_usize {
            let mut lo = [u8::MAX; 3];
            let mut hi = [u8::MIN; 3];

            for ny in y.saturating_sub(1)..(y + 2).min(9) {
                for nx in x.saturating_sub(1)..(x + 2).min(16) {
                    let c = grid.get(nx, ny).copied().unwrap_or_default().channels();
                    for i in 0..3 {
                        lo[i] = lo[i].min(c[i]);
                        hi[i] = hi[i].max(c[i]);
                    }
                }
            }
            let c = out.get(x, y).copied().unwrap_or_default().channels();

            for i in 0..3 {
                assert!(lo[i] <= c[i] && c[i] <= hi[i], "({x},{y}) channel {i}");
            }
        }
    }
}

#[test]
fn uniform_grids_have_no_interior_edges() {
    let mut rng = WyRand::new_seed(SEED);

    for &(width, height) in DIMENSIONS {
        let fill = random_grid(&mut rng, 1, 1).pixels()[0];
        let grid = Grid::fill(fill, width, height);
        let out = Sobel::new().clone_and_execute(&grid).unwrap();

        for y in 1..height.saturating_sub(1) {
            for x in 1..width.saturating_sub(1) {
                assert_eq!(out.get(x, y), Some(&Rgb::BLACK));
            }
        }
    }
}

#[test]
fn plain_functions_match_operations() {
    let mut rng = WyRand::new_seed(SEED);
    let grid = random_grid(&mut rng, 33, 17);

    let mut a = grid.clone();
    grayscale(&mut a);
    assert_eq!(a, Grayscale::new().clone_and_execute(&grid).unwrap());

    let mut a = grid.clone();
    pixgrid_procs::box_blur::blur(&mut a).unwrap();
    assert_eq!(a, BoxBlur::new().clone_and_execute(&grid).unwrap());

    let mut a = grid.clone();
    pixgrid_procs::sobel::edge_detect(&mut a).unwrap();
    assert_eq!(a, Sobel::new().clone_and_execute(&grid).unwrap());
}
