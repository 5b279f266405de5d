/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during decoding and encoding
use std::fmt::{Debug, Display, Formatter};
use std::io;

/// The stage the decoder is in when it reads a token
///
/// The header is read in the order listed here, after which
/// every remaining token is a channel value.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeStage {
    /// Waiting for the `P3` magic token
    ExpectMagic,
    /// Waiting for width and height
    ExpectDimensions,
    /// Waiting for the maximum channel value
    ExpectMaxRange,
    /// Reading channel values
    CollectPixels
}

impl Display for DecodeStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectMagic => write!(f, "magic number"),
            Self::ExpectDimensions => write!(f, "image dimensions"),
            Self::ExpectMaxRange => write!(f, "maximum channel value"),
            Self::CollectPixels => write!(f, "pixel data")
        }
    }
}

/// Location of a token in the input
///
/// Both fields are 1-based. `token` counts whitespace separated
/// tokens within the line, not characters.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Position {
    pub line:  usize,
    pub token: usize
}

impl Position {
    pub const fn new(line: usize, token: usize) -> Position {
        Position { line, token }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, token {}", self.line, self.token)
    }
}

/// Possible Errors that may occur during decoding
///
/// No image is produced when any of these is returned.
pub enum PPMDecodeErrors {
    /// The first token is not the `P3` magic.
    ///
    /// # Arguments
    /// - Position of the token
    /// - The token found instead
    InvalidMagic(Position, String),
    /// Width or height is not a positive integer
    InvalidDimensions(Position, String),
    /// Maximum channel value is not an integer in `1..=65535`
    InvalidMaxRange(Position, String),
    /// A channel token is not a number
    InvalidPixelValue(Position, String),
    /// A channel value lies outside `0..=max_range`
    ///
    /// # Arguments
    /// - Position of the token
    /// - The token
    /// - The maximum value declared in the header
    PixelOutOfRange(Position, String, u16),
    /// The number of channel values does not match the dimensions
    ///
    /// # Arguments
    /// - 1st argument is the number of values we expected
    /// - 2nd argument is the number of values the input had
    TruncatedOrOversizedPixelData(usize, usize),
    /// Input ended before the header was complete
    UnexpectedEndOfInput(DecodeStage),
    /// Declared dimensions exceed the configured limits
    ///
    /// # Arguments
    /// - 1st argument is the limit
    /// - 2nd argument is the dimension found
    LargeDimensions(usize, usize)
}

impl PPMDecodeErrors {
    /// Returns true if the body had fewer channel values than the header demands
    pub const fn is_truncated(&self) -> bool {
        matches!(self, Self::TruncatedOrOversizedPixelData(expected, found) if *found < *expected)
    }

    /// Returns true if the body had more channel values than the header demands
    pub const fn is_oversized(&self) -> bool {
        matches!(self, Self::TruncatedOrOversizedPixelData(expected, found) if *found > *expected)
    }

    /// Where in the input the error was detected, if it is tied to a token
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::InvalidMagic(pos, _)
            | Self::InvalidDimensions(pos, _)
            | Self::InvalidMaxRange(pos, _)
            | Self::InvalidPixelValue(pos, _)
            | Self::PixelOutOfRange(pos, _, _) => Some(*pos),
            _ => None
        }
    }
}

impl Debug for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMagic(pos, found) => {
                writeln!(f, "Invalid magic at {pos}, expected `P3` but found `{found}`")
            }
            Self::InvalidDimensions(pos, found) => {
                writeln!(
                    f,
                    "Invalid dimension at {pos}, expected a positive integer but found `{found}`"
                )
            }
            Self::InvalidMaxRange(pos, found) => {
                writeln!(
                    f,
                    "Invalid maximum value at {pos}, expected an integer between 1 and 65535 but found `{found}`"
                )
            }
            Self::InvalidPixelValue(pos, found) => {
                writeln!(f, "Invalid pixel value at {pos}, `{found}` is not a number")
            }
            Self::PixelOutOfRange(pos, found, max) => {
                writeln!(
                    f,
                    "Pixel value `{found}` at {pos} is outside the declared range 0..={max}"
                )
            }
            Self::TruncatedOrOversizedPixelData(expected, found) => {
                let kind = if found < expected { "Truncated" } else { "Oversized" };
                writeln!(
                    f,
                    "{kind} pixel data, expected {expected} channel values but found {found}"
                )
            }
            Self::UnexpectedEndOfInput(stage) => {
                writeln!(f, "Unexpected end of input while reading the {stage}")
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
        }
    }
}

impl Display for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMDecodeErrors {}

/// Errors occurring during encoding
///
/// Only writing to an external sink can fail, encoding
/// into memory never does.
pub enum PPMEncodeErrors {
    IOErrors(io::Error)
}

impl From<io::Error> for PPMEncodeErrors {
    fn from(err: io::Error) -> Self {
        PPMEncodeErrors::IOErrors(err)
    }
}

impl Debug for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PPMEncodeErrors::IOErrors(ref err) => {
                writeln!(f, "I/O error {err}")
            }
        }
    }
}

impl Display for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMEncodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PPMEncodeErrors::IOErrors(err) => Some(err)
        }
    }
}
