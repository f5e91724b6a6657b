/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `pixgrid`
//!
//! This implements four filters over a [`Grid`](pixgrid_core::grid::Grid) of RGB pixels
//!
//! - [`grayscale`]: average the channels of every pixel
//! - [`reflect`]: mirror every row around the vertical center line
//! - [`box_blur`]: 3x3 box blur
//! - [`sobel`]: 3x3 sobel edge detection
//!
//! Each filter is available as a plain function and as a struct
//! implementing [`OperationsTrait`](traits::OperationsTrait).
//!
//! # Example
//! - Blur an image, then detect its edges
//! ```
//! use pixgrid_core::grid::Grid;
//! use pixgrid_core::pixel::Rgb;
//! use pixgrid_procs::box_blur::BoxBlur;
//! use pixgrid_procs::sobel::Sobel;
//! use pixgrid_procs::traits::OperationsTrait;
//!
//! let mut grid = Grid::from_fn(100, 100, |x, _| if x < 50 { Rgb::BLACK } else { Rgb::WHITE });
//! BoxBlur::new().execute(&mut grid).unwrap();
//! Sobel::new().execute(&mut grid).unwrap();
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]

pub mod box_blur;
pub mod grayscale;
pub mod reflect;
pub mod sobel;
pub mod spatial;
pub mod traits;
pub mod utils;
