/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("chroma")
        .about("Replace greenscreen pixels of a plain PPM image with pixels from another")
        .after_help(help_strings::PROMPT_HELP)
        .arg(Arg::new("channel")
            .short('c')
            .long("channel")
            .help("Screen color channel, one of r, g or b")
            .help_heading("PARAMETERS"))
        .arg(Arg::new("threshold")
            .short('t')
            .long("threshold")
            .help("Channel difference between 1.0 and 10.0")
            .long_help(help_strings::THRESHOLD_HELP)
            .help_heading("PARAMETERS"))
        .arg(Arg::new("screen")
            .short('s')
            .long("screen")
            .help("Greenscreen image to read data from")
            .value_parser(value_parser!(PathBuf))
            .help_heading("FILES"))
        .arg(Arg::new("fill")
            .short('f')
            .long("fill")
            .help("Image whose pixels replace the screen")
            .value_parser(value_parser!(PathBuf))
            .help_heading("FILES"))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .help("Output to write the composite to")
            .value_parser(value_parser!(PathBuf))
            .help_heading("FILES"))
        .arg(Arg::new("all-yes")
            .short('y')
            .long("yes")
            .action(ArgAction::SetTrue)
            .help("Overwrite the output file without asking"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print information about the input images as JSON and exit"))
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
            .help("Display information about the decoding options"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Reject malformed images instead of dropping bad values")
            .long_help(help_strings::STRICT_HELP))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of an image to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of an image to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
}
