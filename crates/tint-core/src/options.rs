/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder and Encoder options
//!
//! This module exposes structs with which all implemented
//! decoders and encoders get shared options
//!
//! All supported options are put into one struct per direction so that
//! the same `DecoderOptions` can be reused for every file a tool processes

pub use decoder::DecoderOptions;
pub use encoder::EncoderOptions;

mod decoder;
mod encoder;
