/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Reflect: mirror pixels around the central y-axis
use pixgrid_core::errors::GridErrors;
use pixgrid_core::grid::Grid;

use crate::traits::OperationsTrait;

/// Creates a horizontal mirror image by reflecting the pixels around the central y-axis
///```text
///old grid      new grid
///+---------+   +---------+
///|a b c d e|   |e d c b a|
///|f g h i j|   |j i h g f|
///+---------+   +---------+
///```
/// For odd widths the center column stays in place.
#[derive(Default, Copy, Clone)]
pub struct Reflect;

impl Reflect {
    /// Create a new reflect operation
    #[must_use]
    pub fn new() -> Reflect {
        Self
    }
}

impl OperationsTrait for Reflect {
    fn name(&self) -> &'static str {
        "Reflect"
    }

    fn execute_impl(&self, grid: &mut Grid) -> Result<(), GridErrors> {
        reflect(grid);
        Ok(())
    }
}

/// Reflect `grid` horizontally in place
pub fn reflect(grid: &mut Grid) {
    let width = grid.width();
    reflect_rows(grid.pixels_mut(), width);
}

/// Reflect rows of `width` elements in place
///
/// Column `j` is swapped with column `width - 1 - j` for every `j < width / 2`.
///
/// # Panics
/// If `width` does not evenly divide the length of `in_out_rows`
pub fn reflect_rows<T: Copy>(in_out_rows: &mut [T], width: usize) {
    if width == 0 {
        return;
    }
    assert_eq!(
        in_out_rows.len() % width,
        0,
        "Width does not evenly divide grid"
    );

    for row in in_out_rows.chunks_exact_mut(width) {
        let (left, right) = row.split_at_mut(width / 2);

        // for odd widths right starts with the center column, which
        // the reversed zip never reaches
        for (l, r) in left.iter_mut().zip(right.iter_mut().rev()) {
            core::mem::swap(l, r);
        }
    }
}
