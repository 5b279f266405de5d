/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! In memory representation of a decoded image
use tint_core::info::{ImageInfo, CHANNELS};
use tint_core::log::trace;

use crate::encoder::PPMEncoder;
use crate::tone;

/// A decoded RGB image
///
/// Channel values are stored interleaved and row-major,
/// `R G B R G B ...`, every value lies in `0..=max_range`
/// and there are exactly `width * height * 3` of them.
///
/// Only the decoder creates images, so these invariants
/// hold for every `Image` a caller can get hold of.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image {
    width:     usize,
    height:    usize,
    max_range: u16,
    pixels:    Vec<u16>
}

impl Image {
    /// Assemble an image from validated parts
    ///
    /// The decoder is responsible for checking the invariants
    pub(crate) fn from_parts(info: ImageInfo, pixels: Vec<u16>) -> Image {
        debug_assert_eq!(info.num_values(), Some(pixels.len()));
        debug_assert!(info.max_range >= 1);

        Image {
            width: info.width,
            height: info.height,
            max_range: info.max_range,
            pixels
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return the image width and height
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Return the largest value a channel may hold
    pub const fn max_range(&self) -> u16 {
        self.max_range
    }

    /// Return header information for this image
    pub const fn info(&self) -> ImageInfo {
        ImageInfo::new(self.width, self.height, self.max_range)
    }

    /// Return the raw interleaved channel values
    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    /// Return the `[R, G, B]` values of the pixel at column `x`, row `y`
    ///
    /// Returns `None` if the coordinates are outside the image
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u16; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * CHANNELS;

        match self.pixels.get(start..start + CHANNELS)? {
            [r, g, b] => Some([*r, *g, *b]),
            _ => None
        }
    }

    /// Brighten every channel by `amount`
    ///
    /// Values that would go above `max_range` are clamped to it
    pub fn lighten(&mut self, amount: u32) {
        trace!("Lightening {} values by {amount}", self.pixels.len());
        tone::lighten(&mut self.pixels, amount, self.max_range);
    }

    /// Darken every channel by `amount`
    ///
    /// Values that would go below zero are clamped to zero
    pub fn darken(&mut self, amount: u32) {
        trace!("Darkening {} values by {amount}", self.pixels.len());
        tone::darken(&mut self.pixels, amount);
    }

    /// Encode this image as a plain PPM file with default options
    pub fn encode(&self) -> Vec<u8> {
        PPMEncoder::new(self).encode()
    }
}

#[cfg(test)]
mod tests {
    use crate::decoder::PPMDecoder;

    fn sample() -> crate::Image {
        PPMDecoder::new(b"P3\n2 1\n100\n10 20 30 90 95 100")
            .decode()
            .unwrap()
    }

    #[test]
    fn test_pixel_lookup() {
        let image = sample();

        assert_eq!(image.pixel(0, 0), Some([10, 20, 30]));
        assert_eq!(image.pixel(1, 0), Some([90, 95, 100]));
        assert_eq!(image.pixel(2, 0), None);
        assert_eq!(image.pixel(0, 1), None);
    }

    #[test]
    fn test_lighten_clamps_to_declared_range() {
        let mut image = sample();
        image.lighten(8);

        assert_eq!(image.pixels(), &[18, 28, 38, 98, 100, 100]);
        assert_eq!(image.dimensions(), (2, 1));
        assert_eq!(image.max_range(), 100);
    }

    #[test]
    fn test_darken_preserves_shape() {
        let mut image = sample();
        image.darken(25);

        assert_eq!(image.pixels(), &[0, 0, 5, 65, 70, 75]);
        assert_eq!(image.pixels().len(), image.width() * image.height() * 3);
    }
}
