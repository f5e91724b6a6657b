/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Command line front end for the pixgrid filters
//!
//! Reads a raw, headerless RGB file, runs exactly one filter over it
//! and writes the raw result.
use std::process::exit;

use log::error;

use crate::workflow::run_filter_from_cmd;

mod cmd_args;
mod cmd_parsers;
mod errors;
mod file_io;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::setup_logger(&options);

    let result = cmd_parsers::parse_options(&options).and_then(|opts| run_filter_from_cmd(&opts));

    if let Err(err) = result {
        println!();
        error!(" Could not complete workflow, reason {err:?}");
        println!();
        exit(-1);
    }
}
