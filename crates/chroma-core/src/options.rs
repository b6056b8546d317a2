/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! This module exposes a struct for which all implemented
//! decoders get shared options for decoding

/// Decoder options
///
/// Not all options are respected by all decoders
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:   usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height:  usize,
    /// Whether malformed data is an error or
    /// silently tolerated
    ///
    /// - Default value: false
    strict_mode: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:   1 << 14,
            max_height:  1 << 14,
            strict_mode: false
        }
    }
}

impl DecoderOptions {
    /// Create options that reject anything not conforming
    /// to the format
    pub fn new_strict() -> DecoderOptions {
        DecoderOptions::default().set_strict_mode(true)
    }

    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    /// And reject most errors
    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should be in standards conforming/
    /// strict mode
    ///
    /// This reduces the error tolerance level for the decoders and invalid
    /// samples will be rejected by the decoder instead of being dropped
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}
