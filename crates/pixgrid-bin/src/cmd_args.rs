/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, ArgGroup, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pixgrid")
        .about("Apply a single filter to a raw 8-bit RGB image")
        .arg(Arg::new("in")
            .help("Raw RGB file to read pixels from")
            .index(1)
            .required(true))
        .arg(Arg::new("out")
            .help("File to write the filtered raw RGB pixels to")
            .index(2)
            .required(true))
        .arg(Arg::new("width")
            .long("width")
            .help("Width of the input in pixels")
            .value_parser(value_parser!(usize))
            .required(true))
        .arg(Arg::new("height")
            .long("height")
            .help("Height of the input in pixels")
            .value_parser(value_parser!(usize))
            .required(true))
        .arg(Arg::new("grayscale")
            .short('g')
            .long("grayscale")
            .action(ArgAction::SetTrue)
            .help_heading("FILTERS")
            .help("Convert to grayscale"))
        .arg(Arg::new("reflect")
            .short('r')
            .long("reflect")
            .action(ArgAction::SetTrue)
            .help_heading("FILTERS")
            .help("Reflect horizontally"))
        .arg(Arg::new("blur")
            .short('b')
            .long("blur")
            .action(ArgAction::SetTrue)
            .help_heading("FILTERS")
            .help("Apply a 3x3 box blur"))
        .arg(Arg::new("edges")
            .short('e')
            .long("edges")
            .action(ArgAction::SetTrue)
            .help_heading("FILTERS")
            .help("Detect edges with the sobel operator"))
        .group(ArgGroup::new("filter")
            .args(["grayscale", "reflect", "blur", "edges"])
            .required(true)
            .multiple(false))
        .arg(Arg::new("max-snapshot-bytes")
            .long("max-snapshot-bytes")
            .help("Refuse to blur or detect edges if a copy of the image needs more bytes than this")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("single-threaded")
            .long("single-threaded")
            .action(ArgAction::SetTrue)
            .help("Run filters on one thread"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the filter being run"))
}
