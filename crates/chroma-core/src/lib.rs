/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the chroma crates
//!
//! This crate provides the pieces shared by the PPM codec,
//! the chroma key compositor and the command line tool.
//!
//! It currently contains
//!
//! - An in-memory RGB image made up of rows of pixels
//! - Decoder options shared by decoders
//! - A logging shim that is a no-op unless the `log` feature is enabled
//!
//! # Features
//!  - `log`: Forward `debug!`, `info!`, `warn!` etc. to the [`log`](https://docs.rs/log) crate
//!
#![macro_use]

pub mod image;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod options;

#[cfg(feature = "log")]
pub use log;
