/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A plain Portable Pixmap (`P3`) decoder and encoder
//!
//! The plain format stores an RGB image as text
//!
//! ```text
//! P3
//! # comments run to the end of the line
//! <width> <height>
//! <max_range>
//! <r> <g> <b> <r> <g> <b> ...
//! ```
//!
//! Tokens may be wrapped across lines freely, the decoder only
//! cares about their order.
//!
//! # Usage
//! ```
//! use tint_ppm::PPMDecoder;
//!
//! let mut decoder = PPMDecoder::new(b"P3\n1 1\n255\n10 20 30");
//! let mut image = decoder.decode().unwrap();
//!
//! image.lighten(250);
//! assert_eq!(image.pixel(0, 0), Some([255, 255, 255]));
//!
//! assert_eq!(image.encode(), b"P3\n1 1\n255\n255 255 255\n");
//! ```
//!
//! # Features
//! - `log`: Log header information and progress through the `log` crate (default)
//! - `serde`: Serialize header information

pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use image::Image;
pub use tint_core;

mod decoder;
mod encoder;
mod errors;
mod image;
pub mod tone;
