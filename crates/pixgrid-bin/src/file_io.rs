/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Raw RGB file reading and writing
//!
//! Files hold `width * height` pixels as interleaved `R,G,B` bytes,
//! row-major, with no header.
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::debug;
use pixgrid_core::grid::Grid;

use crate::errors::CmdErrors;

/// Read a raw RGB file into a grid
///
/// The buffer grows with the file, not with the requested dimensions,
/// a size mismatch is reported by [`Grid::from_u8`]
pub fn read_raw_rgb(path: &Path, width: usize, height: usize) -> Result<Grid, CmdErrors> {
    let mut file = File::open(path)?;
    let mut buf = Vec::new();

    file.read_to_end(&mut buf)?;
    debug!("Read {} bytes from {:?}", buf.len(), path);

    Ok(Grid::from_u8(&buf, width, height)?)
}

/// Write a grid as a raw RGB file, replacing any existing file
pub fn write_raw_rgb(path: &Path, grid: &Grid) -> Result<(), CmdErrors> {
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    let mut writer = BufWriter::new(file);

    writer.write_all(grid.as_bytes())?;
    writer.flush()?;

    debug!("Wrote {} bytes to {:?}", grid.as_bytes().len(), path);
    Ok(())
}
