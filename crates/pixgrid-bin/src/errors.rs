/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use pixgrid_core::errors::GridErrors;

/// Errors that stop the command line workflow
pub enum CmdErrors {
    Io(std::io::Error),
    Grid(GridErrors),
    /// A required argument was missing after parsing
    MissingArgument(&'static str)
}

impl Debug for CmdErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => writeln!(f, "I/O error: {err}"),
            Self::Grid(err) => writeln!(f, "{err:?}"),
            Self::MissingArgument(name) => writeln!(f, "Missing argument {name}")
        }
    }
}

impl From<std::io::Error> for CmdErrors {
    fn from(value: std::io::Error) -> Self {
        CmdErrors::Io(value)
    }
}

impl From<GridErrors> for CmdErrors {
    fn from(value: GridErrors) -> Self {
        CmdErrors::Grid(value)
    }
}
