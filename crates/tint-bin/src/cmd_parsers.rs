/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use tint_core::options::{DecoderOptions, EncoderOptions};

use crate::cmd_parsers::global_options::CmdOptions;

pub mod global_options;
pub mod operations;

pub fn get_decoder_options(options: &CmdOptions) -> DecoderOptions {
    DecoderOptions::default()
        .set_max_width(options.max_width)
        .set_max_height(options.max_height)
}

pub fn get_encoder_options(options: &CmdOptions) -> EncoderOptions {
    EncoderOptions::default().set_max_line_length(options.line_length)
}
