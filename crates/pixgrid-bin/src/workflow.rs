/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::info;

use crate::cmd_parsers::CmdOptions;
use crate::errors::CmdErrors;
use crate::file_io::{read_raw_rgb, write_raw_rgb};

/// Read, filter and write a single raw file
///
/// The output file is only created once the filter succeeded.
pub(crate) fn run_filter_from_cmd(options: &CmdOptions) -> Result<(), CmdErrors> {
    info!(
        "Reading {}x{} pixels from {:?}",
        options.width, options.height, options.input
    );
    let mut grid = read_raw_rgb(&options.input, options.width, options.height)?;

    let operation = options.filter.operation(options.filter_options);

    info!("Running {}", operation.name());
    operation.execute(&mut grid)?;

    info!("Writing to {:?}", options.output);
    write_raw_rgb(&options.output, &grid)
}
