/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use chroma_core::image::Image;
use chroma_core::log::trace;

use crate::errors::PPMEncodeErrors;

/// A plain PPM (`P3`) encoder
///
/// Every sample is written as decimal text followed by a single space,
/// each row ends with a newline, so rows carry one trailing space.
pub struct PPMEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PPMEncoder<'a, W> {
    /// Create a new PPM encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PPMEncoder<'a, W> {
        Self { writer }
    }

    /// Write the `P3`, dimensions and maximum value lines
    ///
    /// `dimensions_line` is written as is, a newline is only
    /// added when it lacks one
    fn write_headers(&mut self, dimensions_line: &str) -> Result<(), PPMEncodeErrors> {
        self.writer.write_all(b"P3\n")?;
        self.writer.write_all(dimensions_line.as_bytes())?;

        if !dimensions_line.ends_with('\n') {
            self.writer.write_all(b"\n")?;
        }
        self.writer.write_all(b"255\n")?;

        Ok(())
    }

    /// Encode `image` as a plain PPM file
    ///
    /// # Arguments
    /// - image: Pixels to write, row by row
    /// - dimensions_line: The header line carrying `<width> <height>`, usually the
    ///   one captured by [`PPMDecoder::dimensions_line`](crate::PPMDecoder::dimensions_line)
    pub fn encode(&mut self, image: &Image, dimensions_line: &str) -> Result<(), PPMEncodeErrors> {
        self.write_headers(dimensions_line)?;

        for row in image.rows() {
            for pixel in row {
                for sample in pixel {
                    write!(self.writer, "{sample} ")?;
                }
            }
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;

        trace!("Wrote {} rows", image.rows().len());

        Ok(())
    }
}

/// Encode `image` into a newly allocated buffer
///
/// # Example
/// ```
/// use chroma_core::image::Image;
/// use chroma_ppm::encode_to_vec;
///
/// let image = Image::from_rows(vec![vec![[1, 2, 3]]]);
///
/// assert_eq!(encode_to_vec(&image, "1 1\n"), b"P3\n1 1\n255\n1 2 3 \n");
/// ```
pub fn encode_to_vec(image: &Image, dimensions_line: &str) -> Vec<u8> {
    let mut output = Vec::with_capacity(image.num_pixels() * 12 + 32);

    // writing to a vec cannot fail
    let _ = PPMEncoder::new(&mut output).encode(image, dimensions_line);

    output
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::io::Write;

    use chroma_core::image::Image;

    use crate::{encode_to_vec, PPMEncodeErrors, PPMEncoder};

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_trailing_space_per_row() {
        let image = Image::from_rows(vec![
            vec![[255, 0, 0], [0, 255, 0]],
            vec![[0, 0, 255], [7, 8, 9]],
        ]);
        let output = encode_to_vec(&image, "2 2\n");

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "P3\n2 2\n255\n255 0 0 0 255 0 \n0 0 255 7 8 9 \n"
        );
    }

    #[test]
    fn test_dimensions_line_is_verbatim() {
        let image = Image::new();

        assert_eq!(encode_to_vec(&image, "3   3 \n"), b"P3\n3   3 \n255\n");
        // a header line without a newline is terminated
        assert_eq!(encode_to_vec(&image, "3 3"), b"P3\n3 3\n255\n");
    }

    #[test]
    fn test_io_errors_propagate() {
        let mut writer = FailingWriter;
        let image = Image::fill([1, 1, 1], 1, 1);
        let result = PPMEncoder::new(&mut writer).encode(&image, "1 1\n");

        assert!(matches!(result, Err(PPMEncodeErrors::IoErrors(_))));
    }
}
