/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Chroma key compositing
//!
//! A pixel of the screen image is treated as part of the screen when its
//! screen channel exceeds *each* of the two other channels by more than a
//! given factor. Such pixels are replaced by the pixel at the same position
//! in the fill image, all others are kept.
//!
//! ```
//! use chroma_core::image::Image;
//! use chroma_key::{ChannelSelector, ChromaKey, Threshold};
//!
//! let screen = Image::from_rows(vec![vec![[200, 10, 10], [100, 60, 10]]]);
//! let fill = Image::fill([1, 2, 3], 2, 1);
//!
//! let key = ChromaKey::new(ChannelSelector::Red, Threshold::new(5.0).unwrap());
//! let output = key.composite(&screen, &fill);
//!
//! assert_eq!(output.rows()[0], vec![[1, 2, 3], [100, 60, 10]]);
//! ```
pub use channel::ChannelSelector;
pub use composite::{composite, ChromaKey};
pub use errors::ParameterErrors;
pub use threshold::Threshold;

mod channel;
mod composite;
mod errors;
mod threshold;
