/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub max_width:      usize,
    pub max_height:     usize,
    pub strict_mode:    bool,
    pub override_files: bool,
    pub probe:          bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            max_width:      1 << 14,
            max_height:     1 << 14,
            strict_mode:    false,
            override_files: false,
            probe:          false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(width) = options.get_one::<usize>("max-width") {
        cmd_options.max_width = *width;
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        cmd_options.max_height = *height;
    }

    if options.get_flag("strict") {
        info!("Decoding in strict mode");
        cmd_options.strict_mode = true;
    }

    if options.get_flag("all-yes") {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }

    cmd_options.probe = options.get_flag("probe");

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
