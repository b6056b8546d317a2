/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use chroma_core::image::Image;
use chroma_core::options::DecoderOptions;
use chroma_key::{ChannelSelector, ChromaKey, Threshold};
use chroma_ppm::PPMEncoder;
use clap::ArgMatches;
use log::{debug, info, warn};

use crate::errors::PipelineErrors;
use crate::file_io::{verify_file_paths, write_output, DecodedFile, PPMFile};
use crate::prompt;

/// Parameters as typed by the user, not yet validated
#[derive(Clone, Debug)]
pub struct RawParameters {
    pub channel:   String,
    pub threshold: String,
    pub screen:    PathBuf,
    pub fill:      PathBuf,
    pub output:    PathBuf
}

impl RawParameters {
    /// Take every parameter present on the command line and ask
    /// for the rest, in the order channel, threshold, screen, fill, output
    pub fn from_args_or_prompt<R: BufRead, W: Write>(
        args: &ArgMatches, reader: &mut R, writer: &mut W
    ) -> Result<RawParameters, PipelineErrors> {
        let mut text = |id: &str, question: &str| -> Result<String, PipelineErrors> {
            match args.get_one::<String>(id) {
                Some(value) => Ok(value.clone()),
                None => Ok(prompt::read_line(reader, writer, question)?)
            }
        };
        let channel = text("channel", prompt::CHANNEL_PROMPT)?;
        let threshold = text("threshold", prompt::THRESHOLD_PROMPT)?;

        let mut path = |id: &str, question: &str| -> Result<PathBuf, PipelineErrors> {
            match args.get_one::<PathBuf>(id) {
                Some(value) => Ok(value.clone()),
                None => Ok(PathBuf::from(prompt::read_line(reader, writer, question)?))
            }
        };
        let screen = path("screen", prompt::SCREEN_PROMPT)?;
        let fill = path("fill", prompt::FILL_PROMPT)?;
        let output = path("output", prompt::OUTPUT_PROMPT)?;

        Ok(RawParameters {
            channel,
            threshold,
            screen,
            fill,
            output
        })
    }

    /// Check the channel then the threshold, and that no input doubles as the output
    pub fn validate(&self) -> Result<ChromaKey, PipelineErrors> {
        let channel = self.channel.parse::<ChannelSelector>()?;
        let threshold = self.threshold.parse::<Threshold>()?;

        verify_file_paths(&self.screen, &self.fill, &self.output)?;

        Ok(ChromaKey::new(channel, threshold))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum WorkFlowState {
    Start,
    ParametersAcquired,
    ImagesDecoded,
    DimensionsValidated,
    Composited,
    Encoded,
    Done,
    Aborted
}

impl WorkFlowState {
    /// State reached when the current one succeeds
    pub const fn next(self) -> Option<Self> {
        match self {
            WorkFlowState::Start => Some(WorkFlowState::ParametersAcquired),
            WorkFlowState::ParametersAcquired => Some(WorkFlowState::ImagesDecoded),
            WorkFlowState::ImagesDecoded => Some(WorkFlowState::DimensionsValidated),
            WorkFlowState::DimensionsValidated => Some(WorkFlowState::Composited),
            WorkFlowState::Composited => Some(WorkFlowState::Encoded),
            WorkFlowState::Encoded => Some(WorkFlowState::Done),
            WorkFlowState::Done | WorkFlowState::Aborted => None
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, WorkFlowState::Done | WorkFlowState::Aborted)
    }
}

/// One chroma key run, from raw parameters to the output file
///
/// Parameters are validated before any file is read and both inputs are
/// decoded fully before compositing. The output file is only created once
/// the composite is encoded, so a failed run never leaves a partial output.
pub struct WorkFlow {
    state:      WorkFlowState,
    aborted_in: Option<WorkFlowState>,
    raw:        RawParameters,
    options:    DecoderOptions,
    overwrite:  bool,
    key:        Option<ChromaKey>,
    screen:     Option<DecodedFile>,
    fill:       Option<DecodedFile>,
    image:      Option<Image>,
    encoded:    Option<Vec<u8>>
}

impl WorkFlow {
    /// Create a new workflow
    ///
    /// # Arguments
    /// - raw: Parameters to validate and run with
    /// - options: Options used for decoding both images
    /// - overwrite: Whether an existing output file may be replaced
    pub fn new(raw: RawParameters, options: DecoderOptions, overwrite: bool) -> WorkFlow {
        WorkFlow {
            state: WorkFlowState::Start,
            aborted_in: None,
            raw,
            options,
            overwrite,
            key: None,
            screen: None,
            fill: None,
            image: None,
            encoded: None
        }
    }

    pub const fn state(&self) -> WorkFlowState {
        self.state
    }

    /// The state whose work failed, if the workflow was aborted
    pub const fn aborted_in(&self) -> Option<WorkFlowState> {
        self.aborted_in
    }

    /// Path the composite will be written to
    pub fn output(&self) -> &Path {
        &self.raw.output
    }

    /// Allow or forbid replacing an existing output file
    pub fn set_overwrite(&mut self, overwrite: bool) {
        self.overwrite = overwrite;
    }

    /// The composite image, available once the workflow is past compositing
    pub fn get_image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Advance the workflow one state forward
    ///
    /// On error the workflow moves to [`WorkFlowState::Aborted`] and
    /// further calls do nothing.
    pub fn advance(&mut self) -> Result<(), PipelineErrors> {
        let state = self.state;

        if state.is_finished() {
            return Ok(());
        }
        info!("Current state: {:?}", state);

        let start = Instant::now();

        match self.run_state(state) {
            Ok(()) => {
                if let Some(next) = state.next() {
                    self.state = next;
                }
                debug!(
                    "Finished {:?} in {} ms",
                    state,
                    start.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                warn!("Aborting workflow in state {:?}", state);
                self.state = WorkFlowState::Aborted;
                self.aborted_in = Some(state);
                Err(err)
            }
        }
    }

    /// Advance until the workflow reaches `target`, is done or fails
    pub fn advance_to(&mut self, target: WorkFlowState) -> Result<(), PipelineErrors> {
        while self.state != target && !self.state.is_finished() {
            self.advance()?;
        }
        Ok(())
    }

    /// Advance until the workflow is done or fails
    pub fn advance_to_end(&mut self) -> Result<(), PipelineErrors> {
        while !self.state.is_finished() {
            self.advance()?;
        }
        Ok(())
    }

    fn run_state(&mut self, state: WorkFlowState) -> Result<(), PipelineErrors> {
        match state {
            WorkFlowState::Start => {
                debug!("Parameters: {:?}", self.raw);
            }
            WorkFlowState::ParametersAcquired => {
                let key = self.raw.validate()?;

                info!(
                    "Keying channel {} with threshold {}",
                    key.channel(),
                    key.threshold().get()
                );
                self.key = Some(key);
            }
            WorkFlowState::ImagesDecoded => {
                let screen = PPMFile::new(self.raw.screen.clone(), self.options).decode()?;
                let fill = PPMFile::new(self.raw.fill.clone(), self.options).decode()?;

                self.screen = Some(screen);
                self.fill = Some(fill);

                let (screen, fill) = self.decoded()?;

                if screen.dimensions_line != fill.dimensions_line
                    || !screen.image.same_shape(&fill.image)
                {
                    return Err(PipelineErrors::DimensionMismatch(
                        screen.dimensions_line.clone(),
                        fill.dimensions_line.clone()
                    ));
                }
            }
            WorkFlowState::DimensionsValidated => {
                let key = self.key.ok_or_else(|| missing("parameters"))?;
                let (screen, fill) = self.decoded()?;

                info!(
                    "Replacing {} of {} pixels",
                    key.count_screen_pixels(&screen.image),
                    screen.image.num_pixels()
                );
                self.image = Some(key.composite(&screen.image, &fill.image));
            }
            WorkFlowState::Composited => {
                let image = self.image.as_ref().ok_or_else(|| missing("composite"))?;
                let (screen, _) = self.decoded()?;

                let mut encoded = Vec::with_capacity(screen.size as usize);
                PPMEncoder::new(&mut encoded).encode(image, &screen.dimensions_line)?;

                self.encoded = Some(encoded);
            }
            WorkFlowState::Encoded => {
                let encoded = self.encoded.as_ref().ok_or_else(|| missing("encoded output"))?;

                if !self.overwrite && self.raw.output.exists() {
                    return Err(PipelineErrors::GenericString(format!(
                        "Not overwriting file {:?}",
                        self.raw.output
                    )));
                }
                write_output(&self.raw.output, encoded)?;

                info!("Wrote composite to {:?}", self.raw.output);
            }
            WorkFlowState::Done | WorkFlowState::Aborted => {}
        }
        Ok(())
    }

    fn decoded(&self) -> Result<(&DecodedFile, &DecodedFile), PipelineErrors> {
        match (&self.screen, &self.fill) {
            (Some(screen), Some(fill)) => Ok((screen, fill)),
            _ => Err(missing("decoded images"))
        }
    }
}

fn missing(what: &str) -> PipelineErrors {
    PipelineErrors::GenericString(format!("Workflow has no {what} for this state"))
}
