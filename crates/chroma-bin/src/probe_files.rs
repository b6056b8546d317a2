/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;

use crate::cmd_parsers::get_decoder_options;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::PipelineErrors;
use crate::file_io::PPMFile;
use crate::serde::Metadata;

/// Probe input files, extract metadata, and print to standard output.
pub fn probe_input_files(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), PipelineErrors> {
    let files: Vec<&PathBuf> = ["screen", "fill"]
        .iter()
        .filter_map(|id| args.get_one::<PathBuf>(id))
        .collect();

    if files.is_empty() {
        return Err(PipelineErrors::GenericString(
            "--probe needs at least one of --screen or --fill".to_string()
        ));
    }
    // Limits do not matter here, we only report
    let options = get_decoder_options(cmd_opts)
        .set_max_width(usize::MAX)
        .set_max_height(usize::MAX);

    for in_file in files {
        let decoded = PPMFile::new(in_file.clone(), options).decode()?;
        let metadata = Metadata::new(&decoded);

        let json = serde_json::to_string_pretty(&metadata)
            .map_err(|err| PipelineErrors::GenericString(err.to_string()))?;

        println!("{json}");
    }
    Ok(())
}
