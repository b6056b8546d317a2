/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{stdin, stdout};
use std::process::exit;

use log::{error, info};

use crate::errors::PipelineErrors;
use crate::workflow::{RawParameters, WorkFlow, WorkFlowState};

mod cmd_args;
mod cmd_parsers;
mod errors;
mod file_io;
mod probe_files;
mod prompt;
mod serde;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    let result = if parsed_opts.probe {
        probe_files::probe_input_files(&options, &parsed_opts)
    } else {
        run(&options, &parsed_opts)
    };

    if let Err(err) = result {
        if err.is_user_error() {
            println!("{err}");
        } else {
            println!();
            error!(" Could not complete workflow, reason {:?}", err);
            println!();
        }
        exit(-1);
    }
}

fn run(
    options: &clap::ArgMatches, cmd_opts: &cmd_parsers::global_options::CmdOptions
) -> Result<(), PipelineErrors> {
    let mut reader = stdin().lock();
    let mut writer = stdout().lock();

    let raw = RawParameters::from_args_or_prompt(options, &mut reader, &mut writer)?;

    info!("Creating workflow from input");

    let decoder_options = cmd_parsers::get_decoder_options(cmd_opts);
    let mut workflow = WorkFlow::new(raw, decoder_options, cmd_opts.override_files);

    // validate parameters before asking anything else
    workflow.advance_to(WorkFlowState::ImagesDecoded)?;

    if !cmd_opts.override_files && workflow.output().exists() {
        if !prompt::confirm_overwrite(&mut reader, &mut writer, workflow.output())? {
            return Err(PipelineErrors::GenericString(format!(
                "Not overwriting file {:?}",
                workflow.output()
            )));
        }
        workflow.set_overwrite(true);
    }

    workflow.advance_to_end()
}
