/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use chroma_core::image::{Image, Pixel};
use chroma_core::log::{debug, info, trace, warn};
use chroma_core::options::DecoderOptions;

use crate::errors::{MalformedReason, PPMDecodeErrors};

/// An instance of a plain PPM (`P3`) decoder
///
/// The stream is read as three header lines (magic, `"<width> <height>"`,
/// maximum value) followed by any number of pixel lines.
///
/// Each pixel line is scanned byte by byte:
/// - an ASCII digit extends the current value
/// - a space (0x20) completes the current value, even when no digit was seen,
///   in which case the value is zero
/// - every other byte, newline included, is skipped and does not complete a value
///
/// Completed values are grouped into `R G B` triples per line.
///
/// In the default (lenient) mode
/// - a value still being read when the line ends is dropped
/// - one or two values left over after grouping are dropped
/// - lines that yield no pixels are skipped
/// - the magic and maximum value lines are not checked, and the pixel grid is
///   not compared against the declared dimensions
/// - the declared dimensions are not checked against the configured limits,
///   only the total number of decoded pixels is
///
/// In strict mode every one of those cases is an error instead, and
/// both the header and every row are held to the width and height limits.
pub struct PPMDecoder<'a> {
    data:            &'a [u8],
    position:        usize,
    line_number:     usize,
    decoded_headers: bool,
    dimensions_line: String,
    dimensions:      Option<(usize, usize)>,
    options:         DecoderOptions
}

/// Scanner state for a single pixel line
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum ScanState {
    /// No digit seen since the last space
    Idle,
    /// Digits seen, holding the value so far
    Accumulating(u32)
}

/// Values produced by scanning one line
#[derive(Debug, Default)]
struct ScannedLine {
    values:       Vec<u32>,
    /// A value that was still being read when the line ended
    unterminated: Option<u32>
}

impl<'a> PPMDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data: PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use chroma_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(b"P3\n2 1\n255\n1 2 3 4 5 6 \n");
    ///
    /// assert_eq!(decoder.decode().unwrap().dimensions(), (2, 1));
    /// ```
    pub fn new(data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: PPM encoded data.
    /// # Example
    /// ```
    /// use chroma_core::options::DecoderOptions;
    /// use chroma_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new_with_options(DecoderOptions::new_strict(), b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder {
            data,
            position: 0,
            line_number: 0,
            decoded_headers: false,
            dimensions_line: String::new(),
            dimensions: None,
            options
        }
    }

    /// Read the three header lines and store them in internal state
    ///
    /// Return Err on Error otherwise return nothing,
    pub fn read_headers(&mut self) -> Result<(), PPMDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let strict = self.options.get_strict_mode();

        let magic = self.next_line();
        let dimensions = self.next_line();
        let max_value = self.next_line();

        if strict {
            let magic = magic.ok_or(PPMDecodeErrors::InvalidHeader(
                "stream is empty, expected the P3 magic line".to_string()
            ))?;
            let magic = String::from_utf8_lossy(magic);

            if magic.trim() != "P3" {
                return Err(PPMDecodeErrors::InvalidMagic(magic.trim().to_string()));
            }
            if dimensions.is_none() || max_value.is_none() {
                return Err(PPMDecodeErrors::InvalidHeader(
                    "stream ended before the header was complete".to_string()
                ));
            }
        }

        self.dimensions_line = String::from_utf8_lossy(dimensions.unwrap_or_default()).into_owned();
        self.dimensions = parse_dimensions(&self.dimensions_line);

        if let Some(max_value) = max_value {
            let max_value = String::from_utf8_lossy(max_value);

            if strict && max_value.trim() != "255" {
                return Err(PPMDecodeErrors::UnsupportedMaxValue(
                    max_value.trim().to_string()
                ));
            }
        }

        match self.dimensions {
            Some((width, height)) => {
                info!("Width: {}, height: {}", width, height);

                if strict {
                    self.check_dimensions(width, height)?;
                }
            }
            None if strict => {
                let msg = format!(
                    "expected `<width> <height>` but found {:?}",
                    self.dimensions_line.trim_end()
                );
                return Err(PPMDecodeErrors::InvalidHeader(msg));
            }
            None => {
                warn!(
                    "Could not read dimensions from {:?}, trusting the pixel data",
                    self.dimensions_line.trim_end()
                );
            }
        }
        self.decoded_headers = true;

        Ok(())
    }

    /// Return the raw dimensions line, trailing newline included,
    /// or none if headers aren't decoded
    pub fn dimensions_line(&self) -> Option<&str> {
        if self.decoded_headers {
            Some(&self.dimensions_line)
        } else {
            None
        }
    }

    /// Return the dimensions declared in the header or none if
    /// headers aren't decoded or the dimensions line isn't `<width> <height>`
    pub const fn get_dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            self.dimensions
        } else {
            None
        }
    }

    /// Decode a ppm encoded stream and return the pixels in it
    pub fn decode(&mut self) -> Result<Image, PPMDecodeErrors> {
        self.read_headers()?;

        let strict = self.options.get_strict_mode();
        // a single text line may carry a whole image, so lenient
        // decoding only bounds the pixel count
        let max_pixels = self
            .options
            .get_max_width()
            .saturating_mul(self.options.get_max_height());
        let mut image = Image::new();
        let mut num_pixels = 0_usize;

        while let Some(line) = self.next_line() {
            let row = self.decode_row(line)?;

            if row.is_empty() {
                trace!("Skipping line {} with no pixels", self.line_number);
                continue;
            }
            if strict {
                self.check_dimensions(row.len(), image.dimensions().1 + 1)?;
            }
            num_pixels += row.len();
            image.push_row(row);

            if num_pixels > max_pixels {
                return Err(PPMDecodeErrors::TooManyPixels(max_pixels, num_pixels));
            }
        }
        let found = image.dimensions();

        if strict {
            if let Some(expected) = self.dimensions {
                if found != expected || !image.is_rectangular() {
                    return Err(PPMDecodeErrors::ShapeMismatch { expected, found });
                }
            }
        } else if !image.is_rectangular() {
            warn!("Pixel rows have differing lengths");
        }
        debug!("Decoded {}x{} pixels", found.0, found.1);

        Ok(image)
    }

    fn decode_row(&self, line: &[u8]) -> Result<Vec<Pixel>, PPMDecodeErrors> {
        let strict = self.options.get_strict_mode();
        let scanned = scan_line(line, strict).map_err(|reason| self.malformed(reason))?;

        if let Some(value) = scanned.unterminated {
            if strict {
                return Err(self.malformed(MalformedReason::UnterminatedValue(value)));
            }
            warn!(
                "Dropping value {} at the end of line {}, it is not followed by a space",
                value, self.line_number
            );
        }
        let remainder = scanned.values.len() % 3;

        if remainder != 0 {
            if strict {
                return Err(self.malformed(MalformedReason::IncompleteTriple(
                    scanned.values.len()
                )));
            }
            warn!(
                "Dropping {} trailing value(s) on line {}",
                remainder, self.line_number
            );
        }

        Ok(scanned
            .values
            .chunks_exact(3)
            .map(|triple| [triple[0], triple[1], triple[2]])
            .collect())
    }

    fn malformed(&self, reason: MalformedReason) -> PPMDecodeErrors {
        PPMDecodeErrors::MalformedPixelData {
            line: self.line_number,
            reason
        }
    }

    fn check_dimensions(&self, width: usize, height: usize) -> Result<(), PPMDecodeErrors> {
        if width > self.options.get_max_width() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                width
            ));
        }
        if height > self.options.get_max_height() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                height
            ));
        }
        Ok(())
    }

    /// Return the next line including its `\n`, the last line may lack one.
    ///
    /// Returns `None` once the stream is exhausted
    fn next_line(&mut self) -> Option<&'a [u8]> {
        let remaining = self.data.get(self.position..)?;

        if remaining.is_empty() {
            return None;
        }
        let end = remaining
            .iter()
            .position(|&byte| byte == b'\n')
            .map_or(remaining.len(), |pos| pos + 1);

        self.position += end;
        self.line_number += 1;

        Some(&remaining[..end])
    }
}

/// Parse a `"<width> <height>"` line
fn parse_dimensions(line: &str) -> Option<(usize, usize)> {
    let mut fields = line.split_ascii_whitespace();

    let width = fields.next()?.parse::<usize>().ok()?;
    let height = fields.next()?.parse::<usize>().ok()?;

    if fields.next().is_some() {
        return None;
    }
    Some((width, height))
}

/// Scan a single pixel line into its completed values
///
/// In lenient mode this never fails, in strict mode anything other than
/// space separated, space terminated digits is rejected.
fn scan_line(line: &[u8], strict: bool) -> Result<ScannedLine, MalformedReason> {
    let mut scanned = ScannedLine::default();
    let mut state = ScanState::Idle;

    for &byte in line {
        state = match (state, byte) {
            (ScanState::Idle, b'0'..=b'9') => ScanState::Accumulating(u32::from(byte - b'0')),
            (ScanState::Accumulating(value), b'0'..=b'9') => {
                let digit = u32::from(byte - b'0');

                if strict {
                    let next = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(digit))
                        .ok_or(MalformedReason::Overflow)?;
                    ScanState::Accumulating(next)
                } else {
                    ScanState::Accumulating(value.wrapping_mul(10).wrapping_add(digit))
                }
            }
            (ScanState::Accumulating(value), b' ') => {
                scanned.values.push(value);
                ScanState::Idle
            }
            (ScanState::Idle, b' ') => {
                if strict {
                    return Err(MalformedReason::EmptyField);
                }
                scanned.values.push(0);
                ScanState::Idle
            }
            (current, b'\n' | b'\r') => current,
            (current, other) => {
                if strict {
                    return Err(MalformedReason::UnexpectedByte(other));
                }
                current
            }
        };
    }
    if let ScanState::Accumulating(value) = state {
        scanned.unterminated = Some(value);
    }
    Ok(scanned)
}

#[cfg(test)]
mod tests {
    use chroma_core::options::DecoderOptions;

    use crate::decoder::{parse_dimensions, scan_line};
    use crate::errors::MalformedReason;
    use crate::{PPMDecodeErrors, PPMDecoder};

    #[test]
    fn test_scan_terminated_values() {
        let scanned = scan_line(b"10 20 30 \n", false).unwrap();

        assert_eq!(scanned.values, vec![10, 20, 30]);
        assert_eq!(scanned.unterminated, None);
    }

    #[test]
    fn test_scan_drops_unterminated_value() {
        let scanned = scan_line(b"10 20 30\n", false).unwrap();

        assert_eq!(scanned.values, vec![10, 20]);
        assert_eq!(scanned.unterminated, Some(30));
    }

    #[test]
    fn test_scan_space_without_digits_is_zero() {
        let scanned = scan_line(b"1  2 ", false).unwrap();
        assert_eq!(scanned.values, vec![1, 0, 2]);

        assert_eq!(
            scan_line(b"1  2 ", true).unwrap_err(),
            MalformedReason::EmptyField
        );
    }

    #[test]
    fn test_scan_other_bytes_do_not_flush() {
        // the tab is skipped so both digits join into one value
        let scanned = scan_line(b"1\t2 ", false).unwrap();
        assert_eq!(scanned.values, vec![12]);

        assert_eq!(
            scan_line(b"1\t2 ", true).unwrap_err(),
            MalformedReason::UnexpectedByte(b'\t')
        );
    }

    #[test]
    fn test_scan_overflow() {
        assert!(scan_line(b"99999999999 ", false).is_ok());
        assert_eq!(
            scan_line(b"99999999999 ", true).unwrap_err(),
            MalformedReason::Overflow
        );
    }

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(parse_dimensions("4 3\n"), Some((4, 3)));
        assert_eq!(parse_dimensions("4 3 2\n"), None);
        assert_eq!(parse_dimensions("four three\n"), None);
        assert_eq!(parse_dimensions(""), None);
    }

    #[test]
    fn test_lenient_drops_incomplete_triples() {
        let data = b"P3\n2 2\n255\n1 2 3 4 5 6 7 \n8 9 \n10 11 12 13 14 15 \n";
        let image = PPMDecoder::new(data).decode().unwrap();

        // the second line yields no pixel and is skipped
        assert_eq!(
            image.rows(),
            &[vec![[1, 2, 3], [4, 5, 6]], vec![[10, 11, 12], [13, 14, 15]]]
        );
    }

    #[test]
    fn test_lenient_ignores_magic_and_max_value() {
        let data = b"P6\n1 1\n65535\n1 2 3 \n";
        let mut decoder = PPMDecoder::new(data);

        assert_eq!(decoder.decode().unwrap().dimensions(), (1, 1));
        assert_eq!(decoder.dimensions_line(), Some("1 1\n"));
    }

    #[test]
    fn test_strict_rejects_magic() {
        let data = b"P6\n1 1\n255\n1 2 3 \n";
        let options = DecoderOptions::new_strict();
        let result = PPMDecoder::new_with_options(options, data).decode();

        assert!(matches!(result, Err(PPMDecodeErrors::InvalidMagic(_))));
    }

    #[test]
    fn test_strict_rejects_max_value() {
        let data = b"P3\n1 1\n65535\n1 2 3 \n";
        let options = DecoderOptions::new_strict();
        let result = PPMDecoder::new_with_options(options, data).decode();

        assert!(matches!(result, Err(PPMDecodeErrors::UnsupportedMaxValue(_))));
    }

    #[test]
    fn test_strict_reports_line_number() {
        let data = b"P3\n2 2\n255\n1 2 3 4 5 6 \n1 2 3 4 5 6\n";
        let options = DecoderOptions::new_strict();
        let result = PPMDecoder::new_with_options(options, data).decode();

        match result {
            Err(PPMDecodeErrors::MalformedPixelData { line, reason }) => {
                assert_eq!(line, 5);
                assert_eq!(reason, MalformedReason::UnterminatedValue(6));
            }
            _ => panic!("expected malformed pixel data")
        }
    }

    #[test]
    fn test_strict_shape_mismatch() {
        let data = b"P3\n2 2\n255\n1 2 3 4 5 6 \n";
        let options = DecoderOptions::new_strict();
        let result = PPMDecoder::new_with_options(options, data).decode();

        match result {
            Err(PPMDecodeErrors::ShapeMismatch { expected, found }) => {
                assert_eq!(expected, (2, 2));
                assert_eq!(found, (2, 1));
            }
            _ => panic!("expected a shape mismatch")
        }
    }

    #[test]
    fn test_large_dimensions() {
        let data = b"P3\n100 1\n255\n";
        let options = DecoderOptions::new_strict().set_max_width(10);
        let result = PPMDecoder::new_with_options(options, data).decode();

        assert!(matches!(result, Err(PPMDecodeErrors::LargeDimensions(10, 100))));
        // lenient decoding does not trust the header
        let options = DecoderOptions::default().set_max_width(10);
        assert!(PPMDecoder::new_with_options(options, data).decode().is_ok());
    }

    #[test]
    fn test_strict_rows_are_bounded() {
        let data = b"P3\n2 1\n255\n1 2 3 4 5 6 7 8 9 \n";
        let options = DecoderOptions::new_strict().set_max_width(2).set_max_height(5);
        let mut decoder = PPMDecoder::new_with_options(options, data);

        // the header passes, the row itself does not
        assert!(matches!(
            decoder.decode(),
            Err(PPMDecodeErrors::LargeDimensions(2, 3))
        ));
    }

    #[test]
    fn test_lenient_bounds_total_pixels() {
        let data = b"P3\n2 2\n255\n1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 \n";
        let options = DecoderOptions::default().set_max_width(2).set_max_height(2);
        let result = PPMDecoder::new_with_options(options, data).decode();

        assert!(matches!(result, Err(PPMDecodeErrors::TooManyPixels(4, 5))));

        // the same pixels fit once the limit covers them, whatever the row length
        let options = DecoderOptions::default().set_max_width(1).set_max_height(5);
        let image = PPMDecoder::new_with_options(options, data).decode().unwrap();
        assert_eq!(image.dimensions(), (5, 1));
    }

    #[test]
    fn test_empty_stream() {
        let mut decoder = PPMDecoder::new(b"");

        assert!(decoder.decode().unwrap().is_empty());
        assert_eq!(decoder.dimensions_line(), Some(""));
        assert_eq!(decoder.get_dimensions(), None);

        let options = DecoderOptions::new_strict();
        assert!(PPMDecoder::new_with_options(options, b"").decode().is_err());
    }
}
