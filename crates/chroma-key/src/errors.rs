/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

/// Invalid compositing parameters
///
/// The `Display` output is meant to be shown to the user as is.
#[derive(Clone, Eq, PartialEq)]
pub enum ParameterErrors {
    /// Channel was not one of `r`, `g` or `b`, carries the rejected input
    InvalidChannel(String),
    /// Threshold was not a number in `[1.0, 10.0]`, carries the rejected input
    InvalidThreshold(String)
}

impl Display for ParameterErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidChannel(_) => {
                write!(f, "Invalid color channel. Valid color channels: r, g, b")
            }
            Self::InvalidThreshold(_) => {
                write!(
                    f,
                    "Invalid channel difference. Valid values are between 1.0 and 10.0"
                )
            }
        }
    }
}

impl Debug for ParameterErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidChannel(input) | Self::InvalidThreshold(input) => {
                writeln!(f, "{self} (got {input:?})")
            }
        }
    }
}

impl std::error::Error for ParameterErrors {}
