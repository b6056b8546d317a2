/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A plain PPM (`P3`) decoder and encoder
//!
//! The plain variant stores every sample as decimal text, so the decoder
//! works line by line over the pixel stream instead of copying raw bytes.
//!
//! # Decoding
//! ```
//! use chroma_ppm::PPMDecoder;
//!
//! let mut decoder = PPMDecoder::new(b"P3\n1 1\n255\n10 20 30 \n");
//! let image = decoder.decode().unwrap();
//!
//! assert_eq!(image.rows()[0][0], [10, 20, 30]);
//! assert_eq!(decoder.dimensions_line(), Some("1 1\n"));
//! ```
//!
//! # Leniency
//! By default the decoder is lenient, a malformed pixel row is truncated
//! rather than rejected, see [`PPMDecoder`] for the exact rules.
//! Enable strict mode via [`DecoderOptions::set_strict_mode`] to turn
//! those cases into errors.
//!
//! [`DecoderOptions::set_strict_mode`]: chroma_core::options::DecoderOptions::set_strict_mode
pub use chroma_core;
pub use decoder::PPMDecoder;
pub use encoder::{encode_to_vec, PPMEncoder};
pub use errors::{MalformedReason, PPMDecodeErrors, PPMEncodeErrors};

mod decoder;
mod encoder;
mod errors;
