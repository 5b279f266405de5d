/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Default line length for textual formats.
///
/// netpbm recommends that no line of a plain PPM is longer than this.
pub const DEFAULT_LINE_LENGTH: usize = 70;

/// Encoder options
///
/// Controls how encoders lay out their output
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct EncoderOptions {
    max_line_length: usize
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_LINE_LENGTH
        }
    }
}

impl EncoderOptions {
    /// Get the maximum number of characters a line may contain
    ///
    /// Zero means lines are never wrapped
    pub const fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    /// Set the maximum number of characters per line of output
    ///
    /// A single value longer than the limit is still written whole
    /// on its own line. Use `0` to emit each image row on one line
    #[must_use]
    pub fn set_max_line_length(mut self, length: usize) -> Self {
        self.max_line_length = length;
        self
    }
}
