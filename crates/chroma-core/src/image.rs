/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! In-memory representation of a decoded RGB image

/// A single RGB pixel, components are stored in `R, G, B` order.
///
/// Components are conventionally in `0..=255`, but nothing clamps them,
/// a decoder hands back whatever integers the stream contained.
pub type Pixel = [u32; 3];

/// An image stored as rows of pixels.
///
/// The rows are usually of equal length, but a leniently decoded
/// stream may produce ragged rows, see [`Image::is_rectangular`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Image {
    rows: Vec<Vec<Pixel>>
}

impl Image {
    /// Create a new image with no rows
    pub const fn new() -> Image {
        Image { rows: Vec::new() }
    }

    /// Create an image from already built rows
    ///
    /// # Example
    /// ```
    /// use chroma_core::image::Image;
    /// let image = Image::from_rows(vec![vec![[255, 0, 0], [0, 255, 0]]]);
    /// assert_eq!(image.dimensions(), (2, 1));
    /// ```
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Image {
        Image { rows }
    }

    /// Create a `width` by `height` image where every pixel is `pixel`
    pub fn fill(pixel: Pixel, width: usize, height: usize) -> Image {
        Image {
            rows: vec![vec![pixel; width]; height]
        }
    }

    /// Append a row to the bottom of the image
    pub fn push_row(&mut self, row: Vec<Pixel>) {
        self.rows.push(row);
    }

    /// Return the image dimensions as `(width, height)`
    ///
    /// Width is the length of the first row, an image without rows
    /// has dimensions `(0, 0)`
    pub fn dimensions(&self) -> (usize, usize) {
        let width = self.rows.first().map_or(0, Vec::len);

        (width, self.rows.len())
    }

    pub fn rows(&self) -> &[Vec<Pixel>] {
        &self.rows
    }

    /// Return the pixel at column `x` of row `y`, if it exists
    pub fn get(&self, x: usize, y: usize) -> Option<&Pixel> {
        self.rows.get(y).and_then(|row| row.get(x))
    }

    /// Return true if every row has the same length
    pub fn is_rectangular(&self) -> bool {
        let (width, _) = self.dimensions();

        self.rows.iter().all(|row| row.len() == width)
    }

    /// Return true if both images have the same number of rows and
    /// every row has the same length as its counterpart
    pub fn same_shape(&self, other: &Image) -> bool {
        self.rows.len() == other.rows.len()
            && self
                .rows
                .iter()
                .zip(other.rows.iter())
                .all(|(a, b)| a.len() == b.len())
    }

    /// Total number of pixels across all rows
    pub fn num_pixels(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::image::Image;

    #[test]
    fn test_empty_image_dimensions() {
        let image = Image::new();

        assert_eq!(image.dimensions(), (0, 0));
        assert!(image.is_rectangular());
        assert!(image.is_empty());
    }

    #[test]
    fn test_ragged_rows() {
        let image = Image::from_rows(vec![vec![[1, 2, 3]; 3], vec![[1, 2, 3]; 2]]);

        assert_eq!(image.dimensions(), (3, 2));
        assert!(!image.is_rectangular());
        assert_eq!(image.num_pixels(), 5);
        assert_eq!(image.get(2, 1), None);
        assert_eq!(image.get(1, 1), Some(&[1, 2, 3]));
    }

    #[test]
    fn test_same_shape() {
        let a = Image::fill([0, 0, 0], 4, 4);
        let b = Image::fill([9, 9, 9], 4, 4);
        let c = Image::fill([0, 0, 0], 3, 3);

        assert!(a.same_shape(&b));
        assert!(!a.same_shape(&c));
    }
}
