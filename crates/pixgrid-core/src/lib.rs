/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all pixgrid libraries
//!
//! This crate provides the data types the filters in `pixgrid-procs`
//! operate on.
//!
//! It currently contains
//!
//! - An 8-bit [`Rgb`](pixel::Rgb) pixel
//! - A row-major [`Grid`](grid::Grid) of pixels which owns its dimensions
//! - A read-only [`Snapshot`](snapshot::Snapshot) of a grid, taken before
//!   neighborhood filters overwrite it
//! - [`FilterOptions`](options::FilterOptions) shared by all filters
//! - The [`GridErrors`](errors::GridErrors) error type
//!
//! # Example
//! ```
//! use pixgrid_core::grid::Grid;
//! use pixgrid_core::pixel::Rgb;
//!
//! let grid = Grid::from_fn(4, 2, |x, y| Rgb::new((x * 10) as u8, (y * 10) as u8, 0));
//!
//! assert_eq!(grid.dimensions(), (4, 2));
//! assert_eq!(grid.get(3, 1), Some(&Rgb::new(30, 10, 0)));
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(clippy::module_name_repetitions, clippy::doc_markdown)]

pub mod errors;
pub mod grid;
pub mod options;
pub mod pixel;
pub mod snapshot;
