/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;
use std::fmt::{Debug, Formatter};
use std::io;

use tint_ppm::{PPMDecodeErrors, PPMEncodeErrors};

/// Errors that stop the command line workflow
pub enum CmdErrors {
    /// Reading or writing a file failed
    Io(OsString, io::Error),
    /// A file could not be decoded, this is fatal for that file
    Decode(OsString, PPMDecodeErrors),
    Encode(OsString, PPMEncodeErrors),
    Serialize(serde_json::Error),
    Generic(String)
}

impl Debug for CmdErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CmdErrors::Io(file, err) => {
                writeln!(f, "I/O error on {:?}: {err}", file)
            }
            CmdErrors::Decode(file, err) => {
                write!(f, "Could not decode {:?}: {err:?}", file)
            }
            CmdErrors::Encode(file, err) => {
                write!(f, "Could not encode {:?}: {err:?}", file)
            }
            CmdErrors::Serialize(err) => {
                writeln!(f, "Could not serialize metadata: {err}")
            }
            CmdErrors::Generic(reason) => {
                writeln!(f, "{reason}")
            }
        }
    }
}

impl From<serde_json::Error> for CmdErrors {
    fn from(err: serde_json::Error) -> Self {
        CmdErrors::Serialize(err)
    }
}
