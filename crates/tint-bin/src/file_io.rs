/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::{OsStr, OsString};
use std::fs::{read, OpenOptions};
use std::io::BufWriter;

use tint_core::info::ImageInfo;
use tint_core::options::{DecoderOptions, EncoderOptions};
use tint_ppm::{Image, PPMDecoder, PPMEncoder};

use crate::errors::CmdErrors;

pub struct PPMFile {
    file_path: OsString,
    options:   DecoderOptions
}

impl PPMFile {
    pub fn new(file_path: OsString, options: DecoderOptions) -> PPMFile {
        PPMFile { file_path, options }
    }

    fn contents(&self) -> Result<Vec<u8>, CmdErrors> {
        read(&self.file_path).map_err(|err| CmdErrors::Io(self.file_path.clone(), err))
    }

    /// Read and fully decode the file
    pub fn into_image(self) -> Result<Image, CmdErrors> {
        let data = self.contents()?;

        PPMDecoder::new_with_options(self.options, &data)
            .decode()
            .map_err(|err| CmdErrors::Decode(self.file_path, err))
    }

    /// Read only as much of the file as needed to report its header
    ///
    /// Returns the header together with the file size in bytes
    pub fn probe(&self) -> Result<(ImageInfo, u64), CmdErrors> {
        let data = self.contents()?;
        let mut decoder = PPMDecoder::new_with_options(self.options, &data);

        decoder
            .read_headers()
            .map_err(|err| CmdErrors::Decode(self.file_path.clone(), err))?;

        let info = decoder.get_info().ok_or_else(|| {
            CmdErrors::Generic(format!("No header information for {:?}", self.file_path))
        })?;

        Ok((info, data.len() as u64))
    }
}

/// Encode `image` and write it to `path`, replacing any existing file
pub fn write_image(path: &OsStr, image: &Image, options: EncoderOptions) -> Result<usize, CmdErrors> {
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)
        .map_err(|err| CmdErrors::Io(path.to_os_string(), err))?;

    let mut writer = BufWriter::new(file);

    PPMEncoder::new_with_options(image, options)
        .encode_to(&mut writer)
        .map_err(|err| CmdErrors::Encode(path.to_os_string(), err))
}
