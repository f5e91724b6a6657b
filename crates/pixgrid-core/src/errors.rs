/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during grid construction and filtering
use std::fmt::{Debug, Display, Formatter};

/// All possible grid errors that can occur.
pub enum GridErrors {
    /// The read-only copy needed by a neighborhood filter could not be allocated.
    ///
    /// Carries the number of bytes requested. The grid is left untouched.
    AllocationFailure(usize),
    /// Buffer length does not match the dimensions, `(expected, found)`
    DimensionsMisMatch(usize, usize),
    /// `width * height` does not fit in a usize, `(width, height)`
    DimensionsOverflow(usize, usize)
}

impl Debug for GridErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllocationFailure(bytes) => {
                writeln!(
                    f,
                    "Not enough memory to create a copy of the grid, {bytes} bytes requested"
                )
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} but found {found}"
                )
            }
            Self::DimensionsOverflow(width, height) => {
                writeln!(f, "Dimensions {width}x{height} overflow a usize")
            }
        }
    }
}

impl Display for GridErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for GridErrors {}
