/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use chroma_core::image::{Image, Pixel};
use chroma_core::log::debug;

use crate::channel::ChannelSelector;
use crate::threshold::Threshold;

/// Replaces screen colored pixels of one image with pixels of another
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChromaKey {
    channel:   ChannelSelector,
    threshold: Threshold
}

impl ChromaKey {
    /// Create a new chroma key filter
    ///
    /// # Arguments
    /// - channel: The channel that dominates screen pixels
    /// - threshold: How many times larger than each of the two other channels
    ///   the screen channel must be
    pub const fn new(channel: ChannelSelector, threshold: Threshold) -> ChromaKey {
        ChromaKey { channel, threshold }
    }

    pub const fn channel(&self) -> ChannelSelector {
        self.channel
    }

    pub const fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Return true if `pixel` belongs to the screen and should be replaced
    ///
    /// Ratios are computed in floating point, so a reference channel of zero
    /// gives an infinite ratio which always exceeds the threshold, while a
    /// zero screen channel over a zero reference (NaN) never does.
    #[inline]
    pub fn is_screen_pixel(&self, pixel: &Pixel) -> bool {
        let threshold = self.threshold.get();
        let screen = f64::from(pixel[self.channel.screen_index()]);

        self.channel
            .reference_indices()
            .iter()
            .all(|&index| screen / f64::from(pixel[index]) > threshold)
    }

    /// Composite `fill` into the screen pixels of `screen`
    ///
    /// Both images are expected to have the same shape. Should `fill`
    /// lack a position that `screen` has, the screen pixel is kept there.
    ///
    /// The returned image always has the shape of `screen`.
    pub fn composite(&self, screen: &Image, fill: &Image) -> Image {
        let (width, height) = screen.dimensions();

        debug!(
            "Compositing {}x{} image using channel {} and threshold {}",
            width,
            height,
            self.channel,
            self.threshold.get()
        );

        let rows = screen
            .rows()
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, pixel)| match fill.get(x, y) {
                        Some(fill_pixel) if self.is_screen_pixel(pixel) => *fill_pixel,
                        _ => *pixel
                    })
                    .collect()
            })
            .collect();

        Image::from_rows(rows)
    }

    /// Count pixels of `screen` that would be replaced
    pub fn count_screen_pixels(&self, screen: &Image) -> usize {
        screen
            .rows()
            .iter()
            .flatten()
            .filter(|pixel| self.is_screen_pixel(pixel))
            .count()
    }
}

/// Composite `fill` into the screen pixels of `screen`
///
/// This is a shorthand for [`ChromaKey::new`] followed by [`ChromaKey::composite`]
pub fn composite(
    screen: &Image, fill: &Image, channel: ChannelSelector, threshold: Threshold
) -> Image {
    ChromaKey::new(channel, threshold).composite(screen, fill)
}

#[cfg(test)]
mod tests {
    use chroma_core::image::Image;

    use crate::{composite, ChannelSelector, ChromaKey, Threshold};

    fn key(channel: ChannelSelector, threshold: f64) -> ChromaKey {
        ChromaKey::new(channel, Threshold::new(threshold).unwrap())
    }

    #[test]
    fn test_dominant_pixel_is_replaced() {
        let screen = Image::from_rows(vec![vec![[200, 10, 10]]]);
        let fill = Image::from_rows(vec![vec![[1, 2, 3]]]);
        let output = key(ChannelSelector::Red, 5.0).composite(&screen, &fill);

        assert_eq!(output.rows()[0][0], [1, 2, 3]);
    }

    #[test]
    fn test_one_reference_below_threshold_keeps_pixel() {
        let screen = Image::from_rows(vec![vec![[100, 60, 10]]]);
        let fill = Image::from_rows(vec![vec![[1, 2, 3]]]);
        let output = key(ChannelSelector::Red, 5.0).composite(&screen, &fill);

        assert_eq!(output.rows()[0][0], [100, 60, 10]);
    }

    #[test]
    fn test_ratio_must_strictly_exceed() {
        // 50 / 10 == 5 is not greater than 5
        let key = key(ChannelSelector::Green, 5.0);

        assert!(!key.is_screen_pixel(&[10, 50, 10]));
        assert!(key.is_screen_pixel(&[9, 50, 9]));
    }

    #[test]
    fn test_zero_reference_channels_always_replace() {
        for threshold in [1.0, 5.5, 10.0] {
            assert!(key(ChannelSelector::Red, threshold).is_screen_pixel(&[5, 0, 0]));
        }
        // infinity on one side is not enough when the other ratio fails
        assert!(!key(ChannelSelector::Red, 2.0).is_screen_pixel(&[5, 0, 5]));
    }

    #[test]
    fn test_black_pixel_is_never_replaced() {
        // 0 / 0 is NaN which never compares greater
        assert!(!key(ChannelSelector::Blue, 1.0).is_screen_pixel(&[0, 0, 0]));
    }

    #[test]
    fn test_channel_selection() {
        let pixel = [10, 10, 200];

        assert!(key(ChannelSelector::Blue, 5.0).is_screen_pixel(&pixel));
        assert!(!key(ChannelSelector::Red, 5.0).is_screen_pixel(&pixel));
        assert!(!key(ChannelSelector::Green, 5.0).is_screen_pixel(&pixel));
    }

    #[test]
    fn test_output_pixels_come_from_either_input() {
        let screen = Image::from_rows(vec![
            vec![[0, 255, 0], [120, 130, 140], [0, 90, 1]],
            vec![[3, 200, 3], [0, 0, 0], [255, 255, 255]],
        ]);
        let fill = Image::fill([7, 7, 7], 3, 2);
        let output = composite(
            &screen,
            &fill,
            ChannelSelector::Green,
            Threshold::new(2.0).unwrap()
        );

        assert_eq!(output.dimensions(), screen.dimensions());

        for (y, row) in output.rows().iter().enumerate() {
            for (x, pixel) in row.iter().enumerate() {
                assert!(pixel == screen.get(x, y).unwrap() || pixel == fill.get(x, y).unwrap());
            }
        }
        assert_eq!(output.rows()[0], vec![[7, 7, 7], [120, 130, 140], [7, 7, 7]]);
        assert_eq!(output.rows()[1], vec![[7, 7, 7], [0, 0, 0], [255, 255, 255]]);
    }

    #[test]
    fn test_compositing_with_itself_is_identity() {
        let image = Image::from_rows(vec![
            vec![[200, 10, 10], [1, 1, 1]],
            vec![[30, 250, 40], [9, 8, 200]],
        ]);

        for channel in [
            ChannelSelector::Red,
            ChannelSelector::Green,
            ChannelSelector::Blue
        ] {
            let output = composite(&image, &image, channel, Threshold::new(1.0).unwrap());
            assert_eq!(output, image);
        }
    }

    #[test]
    fn test_missing_fill_positions_keep_screen() {
        let screen = Image::fill([200, 1, 1], 2, 2);
        let fill = Image::fill([5, 5, 5], 1, 1);
        let output = key(ChannelSelector::Red, 3.0).composite(&screen, &fill);

        assert_eq!(output.dimensions(), (2, 2));
        assert_eq!(output.rows()[0], vec![[5, 5, 5], [200, 1, 1]]);
        assert_eq!(output.rows()[1], vec![[200, 1, 1], [200, 1, 1]]);
    }

    #[test]
    fn test_count_screen_pixels() {
        let screen = Image::from_rows(vec![vec![[0, 255, 0], [0, 0, 0], [10, 100, 10]]]);

        assert_eq!(key(ChannelSelector::Green, 10.0).count_screen_pixels(&screen), 1);
        assert_eq!(key(ChannelSelector::Green, 1.0).count_screen_pixels(&screen), 2);
    }
}
