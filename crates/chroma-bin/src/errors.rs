/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::path::PathBuf;

use chroma_key::ParameterErrors;
use chroma_ppm::{PPMDecodeErrors, PPMEncodeErrors};

/// Everything that can stop a compositing run
pub enum PipelineErrors {
    /// Bad channel or threshold
    InvalidParameter(ParameterErrors),
    /// The two images differ in size, carries the
    /// screen and fill dimension lines
    DimensionMismatch(String, String),
    /// Reading from or writing to a file failed
    FileErrors(PathBuf, io::Error),
    /// Reading a prompt answer or writing a prompt failed
    IoErrors(io::Error),
    /// A file is not a readable PPM image
    DecodeErrors(PathBuf, PPMDecodeErrors),
    EncodeErrors(PPMEncodeErrors),
    GenericString(String)
}

impl PipelineErrors {
    /// Return true if the user can fix this by running again
    /// with different input.
    ///
    /// These are reported with a plain message instead of an error log
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter(_) | Self::DimensionMismatch(..) | Self::GenericString(_)
        )
    }
}

impl Display for PipelineErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter(err) => write!(f, "{err}"),
            Self::DimensionMismatch(..) => {
                write!(f, "Invalid images. Both images must be of the same size.")
            }
            Self::FileErrors(path, err) => write!(f, "{}: {err}", path.display()),
            Self::IoErrors(err) => write!(f, "{err}"),
            Self::DecodeErrors(path, err) => {
                write!(f, "Could not decode {}: {err}", path.display())
            }
            Self::EncodeErrors(err) => write!(f, "Could not encode output: {err}"),
            Self::GenericString(message) => write!(f, "{message}")
        }
    }
}

impl Debug for PipelineErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionMismatch(screen, fill) => {
                writeln!(
                    f,
                    "{self} (screen is {:?}, fill is {:?})",
                    screen.trim_end(),
                    fill.trim_end()
                )
            }
            _ => writeln!(f, "{self}")
        }
    }
}

impl std::error::Error for PipelineErrors {}

impl From<ParameterErrors> for PipelineErrors {
    fn from(err: ParameterErrors) -> Self {
        PipelineErrors::InvalidParameter(err)
    }
}

impl From<PPMEncodeErrors> for PipelineErrors {
    fn from(err: PPMEncodeErrors) -> Self {
        PipelineErrors::EncodeErrors(err)
    }
}

impl From<io::Error> for PipelineErrors {
    fn from(err: io::Error) -> Self {
        PipelineErrors::IoErrors(err)
    }
}
