/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Header information reported by decoders

/// Number of channels stored for each pixel, Red, Green and Blue
pub const CHANNELS: usize = 3;

/// Facts read from an image header
///
/// A decoder hands this out once it has read the header,
/// before any pixel data is processed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ImageInfo {
    pub width:     usize,
    pub height:    usize,
    pub max_range: u16
}

impl ImageInfo {
    /// Create a new header description
    pub const fn new(width: usize, height: usize, max_range: u16) -> ImageInfo {
        ImageInfo {
            width,
            height,
            max_range
        }
    }

    /// Number of channel values the image body must contain
    ///
    /// Returns `None` if the count does not fit in a `usize`
    pub fn num_values(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)?
            .checked_mul(CHANNELS)
    }
}
