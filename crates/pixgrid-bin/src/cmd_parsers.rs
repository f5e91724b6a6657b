/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use log::{info, Level};
use pixgrid_core::options::FilterOptions;
use pixgrid_procs::box_blur::BoxBlur;
use pixgrid_procs::grayscale::Grayscale;
use pixgrid_procs::reflect::Reflect;
use pixgrid_procs::sobel::Sobel;
use pixgrid_procs::traits::OperationsTrait;

use crate::errors::CmdErrors;

/// The filter picked on the command line
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FilterKind {
    Grayscale,
    Reflect,
    Blur,
    Edges
}

impl FilterKind {
    /// Create the operation for this filter
    pub fn operation(self, options: FilterOptions) -> Box<dyn OperationsTrait> {
        match self {
            FilterKind::Grayscale => Box::new(Grayscale::new()),
            FilterKind::Reflect => Box::new(Reflect::new()),
            FilterKind::Blur => Box::new(BoxBlur::new_with_options(options)),
            FilterKind::Edges => Box::new(Sobel::new_with_options(options))
        }
    }
}

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub input:          PathBuf,
    pub output:         PathBuf,
    pub width:          usize,
    pub height:         usize,
    pub filter:         FilterKind,
    pub filter_options: FilterOptions
}

pub fn parse_options(options: &ArgMatches) -> Result<CmdOptions, CmdErrors> {
    let input = options
        .get_one::<String>("in")
        .ok_or(CmdErrors::MissingArgument("in"))?;
    let output = options
        .get_one::<String>("out")
        .ok_or(CmdErrors::MissingArgument("out"))?;
    let width = *options
        .get_one::<usize>("width")
        .ok_or(CmdErrors::MissingArgument("width"))?;
    let height = *options
        .get_one::<usize>("height")
        .ok_or(CmdErrors::MissingArgument("height"))?;

    let filter = if options.get_flag("grayscale") {
        FilterKind::Grayscale
    } else if options.get_flag("reflect") {
        FilterKind::Reflect
    } else if options.get_flag("blur") {
        FilterKind::Blur
    } else if options.get_flag("edges") {
        FilterKind::Edges
    } else {
        return Err(CmdErrors::MissingArgument("filter"));
    };
    info!("Selected filter {filter:?}");

    let mut filter_options = FilterOptions::default();

    if let Some(bytes) = options.get_one::<usize>("max-snapshot-bytes") {
        info!("Limiting snapshots to {bytes} bytes");
        filter_options = filter_options.set_max_snapshot_bytes(*bytes);
    }
    if options.get_flag("single-threaded") {
        info!("Running on a single thread");
        filter_options = filter_options.set_use_multithreading(false);
    }

    Ok(CmdOptions {
        input: PathBuf::from(input),
        output: PathBuf::from(output),
        width,
        height,
        filter,
        filter_options
    })
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
