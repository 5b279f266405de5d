/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::borrow::Cow;

use tint_core::info::ImageInfo;
use tint_core::log::{debug, info, trace};
use tint_core::options::DecoderOptions;

use crate::errors::{DecodeStage, PPMDecodeErrors, Position};
use crate::image::Image;

/// Magic token every plain PPM file starts with
pub const PPM_MAGIC: &str = "P3";

/// Upper bound on the pixel storage reserved up front.
///
/// The header is untrusted, a file claiming huge dimensions
/// but carrying few values should not allocate for the claim.
const MAX_RESERVE: usize = 1 << 20;

/// Parser state
///
/// Each stage carries what was read before it, so a later
/// stage cannot be reached without the values it depends on.
#[derive(Copy, Clone, Debug)]
enum State {
    ExpectMagic,
    ExpectDimensions { width: Option<usize> },
    ExpectMaxRange { width: usize, height: usize },
    CollectPixels { info: ImageInfo, expected: usize }
}

/// Token driven state machine shared by all decode entry points
struct Parser {
    state:   State,
    options: DecoderOptions,
    pixels:  Vec<u16>,
    // number of channel values seen, may run past what we store
    seen:    usize
}

impl Parser {
    fn new(options: DecoderOptions) -> Parser {
        Parser {
            state: State::ExpectMagic,
            options,
            pixels: Vec::new(),
            seen: 0
        }
    }

    const fn stage(&self) -> DecodeStage {
        match self.state {
            State::ExpectMagic => DecodeStage::ExpectMagic,
            State::ExpectDimensions { .. } => DecodeStage::ExpectDimensions,
            State::ExpectMaxRange { .. } => DecodeStage::ExpectMaxRange,
            State::CollectPixels { .. } => DecodeStage::CollectPixels
        }
    }

    /// Header information, present once the header has been read
    const fn header(&self) -> Option<ImageInfo> {
        match self.state {
            State::CollectPixels { info, .. } => Some(info),
            _ => None
        }
    }

    fn push_token(&mut self, pos: Position, token: &str) -> Result<(), PPMDecodeErrors> {
        match self.state {
            State::ExpectMagic => {
                if token != PPM_MAGIC {
                    return Err(PPMDecodeErrors::InvalidMagic(pos, token.to_string()));
                }
                trace!("Found magic at {pos}");
                self.state = State::ExpectDimensions { width: None };
            }
            State::ExpectDimensions { width: None } => {
                let width = parse_dimension(pos, token, self.options.get_max_width())?;
                self.state = State::ExpectDimensions { width: Some(width) };
            }
            State::ExpectDimensions { width: Some(width) } => {
                let height = parse_dimension(pos, token, self.options.get_max_height())?;

                info!("Width: {}, height: {}", width, height);
                self.state = State::ExpectMaxRange { width, height };
            }
            State::ExpectMaxRange { width, height } => {
                let max_range = parse_max_range(pos, token)?;
                let info = ImageInfo::new(width, height, max_range);

                let expected = info
                    .num_values()
                    .ok_or(PPMDecodeErrors::LargeDimensions(usize::MAX / height, width))?;

                info!("Max range: {}", max_range);
                debug!("Expecting {} channel values", expected);

                self.pixels = Vec::with_capacity(expected.min(MAX_RESERVE));
                self.state = State::CollectPixels { info, expected };
            }
            State::CollectPixels { info, expected } => {
                let value = parse_channel(pos, token, info.max_range)?;

                if self.seen < expected {
                    self.pixels.push(value);
                }
                self.seen = self.seen.saturating_add(1);
            }
        }
        Ok(())
    }

    /// Validate what was read and produce the image
    fn finish(self) -> Result<Image, PPMDecodeErrors> {
        match self.state {
            State::CollectPixels { info, expected } => {
                if self.seen != expected {
                    return Err(PPMDecodeErrors::TruncatedOrOversizedPixelData(
                        expected, self.seen
                    ));
                }
                Ok(Image::from_parts(info, self.pixels))
            }
            _ => Err(PPMDecodeErrors::UnexpectedEndOfInput(self.stage()))
        }
    }
}

/// An instance of a plain PPM decoder
///
/// The decoder reads the textual `P3` variant, where every
/// channel value is written out as a decimal number.
pub struct PPMDecoder<'a> {
    data:    Cow<'a, str>,
    options: DecoderOptions,
    info:    Option<ImageInfo>
}

impl<'a> PPMDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data: PPM encoded text
    ///
    /// # Example
    /// ```
    /// use tint_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new PPM decoder with the specified options
    ///
    /// Bytes that are not valid UTF-8 are replaced, they then
    /// fail to parse as whatever token the decoder expected there.
    ///
    /// # Example
    /// ```
    /// use tint_core::options::DecoderOptions;
    /// use tint_ppm::PPMDecoder;
    /// let options = DecoderOptions::default().set_max_width(1);
    /// let mut decoder = PPMDecoder::new_with_options(options, b"P3 2 1 255 0 0 0 0 0 0");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder {
            data: String::from_utf8_lossy(data),
            options,
            info: None
        }
    }

    /// Read PPM headers and store them in internal state
    ///
    /// Return Err on Error otherwise return nothing,
    pub fn read_headers(&mut self) -> Result<(), PPMDecodeErrors> {
        if self.info.is_some() {
            return Ok(());
        }
        let info = self.scan_headers()?;
        self.info = Some(info);

        Ok(())
    }

    fn scan_headers(&self) -> Result<ImageInfo, PPMDecodeErrors> {
        let mut parser = Parser::new(self.options);

        for (pos, token) in tokens(self.data.lines()) {
            parser.push_token(pos, token)?;

            if let Some(info) = parser.header() {
                return Ok(info);
            }
        }
        Err(PPMDecodeErrors::UnexpectedEndOfInput(parser.stage()))
    }

    /// Return header information or none if headers
    /// are not decoded
    pub const fn get_info(&self) -> Option<ImageInfo> {
        self.info
    }

    /// Return image dimensions or none if headers aren't decoded
    pub const fn get_dimensions(&self) -> Option<(usize, usize)> {
        match self.info {
            Some(info) => Some((info.width, info.height)),
            None => None
        }
    }

    /// Return the maximum channel value or none if headers
    /// aren't decoded
    pub const fn get_max_range(&self) -> Option<u16> {
        match self.info {
            Some(info) => Some(info.max_range),
            None => None
        }
    }

    /// Decode a ppm encoded file and return the image
    pub fn decode(&mut self) -> Result<Image, PPMDecodeErrors> {
        let image = decode_with_options(self.options, self.data.lines())?;
        self.info = Some(image.info());

        Ok(image)
    }
}

/// Decode an image from its lines with default options
///
/// # Example
/// ```
/// let image = tint_ppm::decode(["P3", "1 1", "255", "10 20 30"]).unwrap();
///
/// assert_eq!(image.pixel(0, 0), Some([10, 20, 30]));
/// ```
pub fn decode<'a, I>(lines: I) -> Result<Image, PPMDecodeErrors>
where
    I: IntoIterator<Item = &'a str>
{
    decode_with_options(DecoderOptions::default(), lines)
}

/// Decode an image from its lines, checking the header against `options`
pub fn decode_with_options<'a, I>(
    options: DecoderOptions, lines: I
) -> Result<Image, PPMDecodeErrors>
where
    I: IntoIterator<Item = &'a str>
{
    let mut parser = Parser::new(options);

    for (pos, token) in tokens(lines) {
        parser.push_token(pos, token)?;
    }
    parser.finish()
}

/// Split lines into whitespace separated tokens with their positions
///
/// A token starting with `#` begins a comment that runs to
/// the end of its line, so a line starting with `#` yields nothing.
fn tokens<'a, I>(lines: I) -> impl Iterator<Item = (Position, &'a str)>
where
    I: IntoIterator<Item = &'a str>
{
    lines
        .into_iter()
        .enumerate()
        .flat_map(|(line_no, line)| {
            line.split_ascii_whitespace()
                .take_while(|token| !token.starts_with('#'))
                .enumerate()
                .map(move |(index, token)| (Position::new(line_no + 1, index + 1), token))
        })
}

/// Parse a token made only of ASCII digits
///
/// Returns `None` if the token is empty or has any other character.
/// Values too large for 64 bits saturate to `u64::MAX`
fn parse_unsigned(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    Some(token.parse::<u64>().unwrap_or(u64::MAX))
}

fn parse_dimension(pos: Position, token: &str, limit: usize) -> Result<usize, PPMDecodeErrors> {
    let value = parse_unsigned(token)
        .filter(|value| *value > 0)
        .ok_or_else(|| PPMDecodeErrors::InvalidDimensions(pos, token.to_string()))?;

    let value = usize::try_from(value).unwrap_or(usize::MAX);

    if value > limit {
        return Err(PPMDecodeErrors::LargeDimensions(limit, value));
    }
    Ok(value)
}

fn parse_max_range(pos: Position, token: &str) -> Result<u16, PPMDecodeErrors> {
    parse_unsigned(token)
        .and_then(|value| u16::try_from(value).ok())
        .filter(|value| *value > 0)
        .ok_or_else(|| PPMDecodeErrors::InvalidMaxRange(pos, token.to_string()))
}

fn parse_channel(pos: Position, token: &str, max_range: u16) -> Result<u16, PPMDecodeErrors> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token)
    };
    let value = parse_unsigned(digits)
        .ok_or_else(|| PPMDecodeErrors::InvalidPixelValue(pos, token.to_string()))?;

    if (negative && value != 0) || value > u64::from(max_range) {
        return Err(PPMDecodeErrors::PixelOutOfRange(
            pos,
            token.to_string(),
            max_range
        ));
    }
    // bounded by max_range above
    Ok(value as u16)
}

#[cfg(test)]
mod tests {
    use tint_core::options::DecoderOptions;

    use crate::decoder::{decode, PPMDecoder};
    use crate::errors::{DecodeStage, PPMDecodeErrors, Position};

    #[test]
    fn test_header_spanning_lines() {
        let image = decode(["P3 1", "1", "", "255 1", "2", "3"]).unwrap();

        assert_eq!(image.dimensions(), (1, 1));
        assert_eq!(image.pixels(), &[1, 2, 3]);
    }

    #[test]
    fn test_trailing_comment() {
        let image = decode(["P3 # plain ppm", "1 1 # one pixel", "255", "4 5 6 # 7"]).unwrap();
        assert_eq!(image.pixels(), &[4, 5, 6]);
    }

    #[test]
    fn test_comment_between_values() {
        let image = decode(["P3", "1 1", "# range follows", "9", "1", "# green", "2 3"]).unwrap();
        assert_eq!(image.max_range(), 9);
    }

    #[test]
    fn test_zero_width() {
        let err = decode(["P3", "0 1", "255"]).unwrap_err();
        assert!(matches!(err, PPMDecodeErrors::InvalidDimensions(p, ref t) if p == Position::new(2, 1) && t == "0"));
    }

    #[test]
    fn test_non_numeric_height() {
        let err = decode(["P3", "1 x", "255"]).unwrap_err();
        assert!(matches!(err, PPMDecodeErrors::InvalidDimensions(p, _) if p == Position::new(2, 2)));
    }

    #[test]
    fn test_signed_dimension_rejected() {
        let err = decode(["P3", "+1 1", "255"]).unwrap_err();
        assert!(matches!(err, PPMDecodeErrors::InvalidDimensions(..)));
    }

    #[test]
    fn test_max_range_bounds() {
        assert!(matches!(
            decode(["P3 1 1 0 0 0 0"]).unwrap_err(),
            PPMDecodeErrors::InvalidMaxRange(..)
        ));
        assert!(matches!(
            decode(["P3 1 1 65536 0 0 0"]).unwrap_err(),
            PPMDecodeErrors::InvalidMaxRange(..)
        ));
        assert!(decode(["P3 1 1 65535 65535 0 0"]).is_ok());
    }

    #[test]
    fn test_pixel_errors() {
        let err = decode(["P3 1 1 255", "1 two 3"]).unwrap_err();
        assert!(matches!(err, PPMDecodeErrors::InvalidPixelValue(p, _) if p == Position::new(2, 2)));

        let err = decode(["P3 1 1 255", "1 256 3"]).unwrap_err();
        assert!(matches!(err, PPMDecodeErrors::PixelOutOfRange(_, _, 255)));

        let err = decode(["P3 1 1 255", "-1 2 3"]).unwrap_err();
        assert!(matches!(err, PPMDecodeErrors::PixelOutOfRange(..)));

        let err = decode(["P3 1 1 255", "1 2 99999999999999999999999"]).unwrap_err();
        assert!(matches!(err, PPMDecodeErrors::PixelOutOfRange(..)));
    }

    #[test]
    fn test_end_of_input_in_each_header_stage() {
        fn stage_of(lines: &[&str]) -> Option<DecodeStage> {
            match decode(lines.iter().copied()) {
                Err(PPMDecodeErrors::UnexpectedEndOfInput(stage)) => Some(stage),
                _ => None
            }
        }

        assert_eq!(stage_of(&[]), Some(DecodeStage::ExpectMagic));
        assert_eq!(stage_of(&["# only a comment"]), Some(DecodeStage::ExpectMagic));
        assert_eq!(stage_of(&["P3"]), Some(DecodeStage::ExpectDimensions));
        assert_eq!(stage_of(&["P3 4"]), Some(DecodeStage::ExpectDimensions));
        assert_eq!(stage_of(&["P3 4 4"]), Some(DecodeStage::ExpectMaxRange));
    }

    #[test]
    fn test_oversized_pixel_data() {
        let err = decode(["P3 1 1 255", "1 2 3 4"]).unwrap_err();

        assert!(err.is_oversized());
        assert!(matches!(err, PPMDecodeErrors::TruncatedOrOversizedPixelData(3, 4)));
    }

    #[test]
    fn test_large_dimensions() {
        let options = DecoderOptions::default().set_max_height(4);
        let mut decoder = PPMDecoder::new_with_options(options, b"P3 1 5 255");

        assert!(matches!(
            decoder.read_headers().unwrap_err(),
            PPMDecodeErrors::LargeDimensions(4, 5)
        ));
    }

    #[test]
    fn test_read_headers_only() {
        // body is truncated, but headers alone are fine
        let mut decoder = PPMDecoder::new(b"P3\n3 2\n15\n1 2");

        assert_eq!(decoder.get_dimensions(), None);
        decoder.read_headers().unwrap();

        assert_eq!(decoder.get_dimensions(), Some((3, 2)));
        assert_eq!(decoder.get_max_range(), Some(15));
        assert!(decoder.decode().unwrap_err().is_truncated());
    }

    #[test]
    fn test_invalid_utf8_is_a_token_error() {
        let mut decoder = PPMDecoder::new(b"P3 1 1 255 \xff 0 0");
        assert!(matches!(
            decoder.decode().unwrap_err(),
            PPMDecodeErrors::InvalidPixelValue(..)
        ));
    }

    #[test]
    fn test_crlf_line_endings() {
        let mut decoder = PPMDecoder::new(b"P3\r\n1 1\r\n255\r\n7 8 9\r\n");
        assert_eq!(decoder.decode().unwrap().pixels(), &[7, 8, 9]);
    }
}
