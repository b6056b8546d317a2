/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;

/// Why a pixel row was rejected in strict mode
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MalformedReason {
    /// A byte that is neither a digit, a space nor a line terminator
    UnexpectedByte(u8),
    /// The line ended while a value was still being read,
    /// i.e. the last value was not followed by a space
    UnterminatedValue(u32),
    /// Two spaces in a row, or a leading space, produce a value
    /// with no digits
    EmptyField,
    /// A value does not fit in 32 bits
    Overflow,
    /// The number of values on the line is not a multiple of three
    IncompleteTriple(usize)
}

impl Display for MalformedReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedByte(byte) => {
                write!(f, "unexpected byte {:?}", char::from(*byte))
            }
            Self::UnterminatedValue(value) => {
                write!(f, "value {value} is not terminated by a space")
            }
            Self::EmptyField => write!(f, "empty field between spaces"),
            Self::Overflow => write!(f, "value does not fit in 32 bits"),
            Self::IncompleteTriple(count) => {
                write!(f, "{count} values do not form whole RGB triples")
            }
        }
    }
}

/// Errors that can occur while decoding a plain PPM stream
pub enum PPMDecodeErrors {
    /// The first line is not `P3`
    InvalidMagic(String),
    /// Header lines are missing or the dimensions line is not `<width> <height>`
    InvalidHeader(String),
    /// The maximum color value is not 255
    UnsupportedMaxValue(String),
    /// Dimensions exceed the configured limit, (limit, found)
    LargeDimensions(usize, usize),
    /// More pixels were decoded than `max_width * max_height`, (limit, found)
    TooManyPixels(usize, usize),
    /// A pixel row could not be decoded, `line` is one based
    MalformedPixelData {
        line:   usize,
        reason: MalformedReason
    },
    /// The decoded pixels do not match the declared `(width, height)`
    ShapeMismatch {
        expected: (usize, usize),
        found:    (usize, usize)
    }
}

impl Debug for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMagic(magic) => {
                writeln!(f, "Invalid magic bytes, expected P3 but found {magic:?}")
            }
            Self::InvalidHeader(reason) => {
                writeln!(f, "Invalid header, reason: {reason}")
            }
            Self::UnsupportedMaxValue(value) => {
                writeln!(f, "Unsupported maximum color value {value:?}, only 255 is supported")
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::TooManyPixels(limit, found) => {
                writeln!(f, "Too many pixels, expected at most {limit} but found {found}")
            }
            Self::MalformedPixelData { line, reason } => {
                writeln!(f, "Malformed pixel data on line {line}: {reason}")
            }
            Self::ShapeMismatch { expected, found } => {
                writeln!(
                    f,
                    "Header declares {}x{} pixels but the pixel data is {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
        }
    }
}

impl Display for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMDecodeErrors {}

/// Errors occurring during encoding
pub enum PPMEncodeErrors {
    IoErrors(io::Error)
}

impl From<io::Error> for PPMEncodeErrors {
    fn from(err: io::Error) -> Self {
        PPMEncodeErrors::IoErrors(err)
    }
}

impl Debug for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PPMEncodeErrors::IoErrors(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMEncodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PPMEncodeErrors::IoErrors(err) => Some(err)
        }
    }
}
