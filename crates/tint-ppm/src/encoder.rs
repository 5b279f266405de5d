/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use tint_core::info::CHANNELS;
use tint_core::log::debug;
use tint_core::options::EncoderOptions;

use crate::decoder::PPM_MAGIC;
use crate::errors::PPMEncodeErrors;
use crate::image::Image;

/// Longest decimal representation of a `u16`
const MAX_DIGITS: usize = 5;

/// A plain PPM encoder
///
/// Every image row starts on a new line, values within a row are
/// separated by single spaces and wrapped so no line is longer than
/// the configured limit. No comments are written.
///
/// # Example
/// ```
/// use tint_ppm::{decode, PPMEncoder};
///
/// let image = decode(["P3", "1 1", "255", "10 20 30"]).unwrap();
/// let bytes = PPMEncoder::new(&image).encode();
///
/// assert_eq!(bytes, b"P3\n1 1\n255\n10 20 30\n");
/// ```
pub struct PPMEncoder<'a> {
    image:   &'a Image,
    options: EncoderOptions
}

impl<'a> PPMEncoder<'a> {
    /// Create a new PPM encoder with default options
    pub fn new(image: &'a Image) -> PPMEncoder<'a> {
        Self::new_with_options(image, EncoderOptions::default())
    }

    /// Create a new PPM encoder whose layout is controlled by `options`
    pub fn new_with_options(image: &'a Image, options: EncoderOptions) -> PPMEncoder<'a> {
        PPMEncoder { image, options }
    }

    fn write_headers(&self, out: &mut Vec<u8>) {
        let header = format!(
            "{PPM_MAGIC}\n{} {}\n{}\n",
            self.image.width(),
            self.image.height(),
            self.image.max_range()
        );
        out.extend_from_slice(header.as_bytes());
    }

    /// Encode the image into a new buffer
    pub fn encode(&self) -> Vec<u8> {
        let limit = self.options.max_line_length();
        // three digits and a separator is the common case
        let mut out = Vec::with_capacity(32 + self.image.pixels().len() * 4);

        self.write_headers(&mut out);

        let row_length = self.image.width() * CHANNELS;
        let mut digits = [0_u8; MAX_DIGITS];

        for row in self.image.pixels().chunks_exact(row_length) {
            let mut line_length = 0;

            for value in row {
                let text = format_decimal(*value, &mut digits);

                if line_length > 0 {
                    if limit != 0 && line_length + 1 + text.len() > limit {
                        out.push(b'\n');
                        line_length = 0;
                    } else {
                        out.push(b' ');
                        line_length += 1;
                    }
                }
                out.extend_from_slice(text);
                line_length += text.len();
            }
            out.push(b'\n');
        }
        debug!("Encoded {} values into {} bytes", self.image.pixels().len(), out.len());

        out
    }

    /// Encode the image into `writer`
    ///
    /// Returns the number of bytes written
    pub fn encode_to<W: Write>(&self, writer: &mut W) -> Result<usize, PPMEncodeErrors> {
        let data = self.encode();

        writer.write_all(&data)?;
        writer.flush()?;

        Ok(data.len())
    }
}

/// Encode `image` as a plain PPM with default options
pub fn encode(image: &Image) -> Vec<u8> {
    PPMEncoder::new(image).encode()
}

/// Write the decimal digits of `value` into the tail of `buf`
fn format_decimal(mut value: u16, buf: &mut [u8; MAX_DIGITS]) -> &[u8] {
    let mut start = MAX_DIGITS;

    loop {
        start -= 1;
        buf[start] = b'0' + (value % 10) as u8;
        value /= 10;

        if value == 0 {
            break;
        }
    }
    &buf[start..]
}
