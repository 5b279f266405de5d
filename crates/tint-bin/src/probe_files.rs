/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::warn;

use crate::cmd_parsers::get_decoder_options;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CmdErrors;
use crate::file_io::PPMFile;
use crate::serde::Metadata;

/// Probe input files, extract metadata, and print to standard output.
pub fn probe_input_files(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), CmdErrors> {
    let Some(inputs) = args.get_raw("in") else {
        return Ok(());
    };
    let options = get_decoder_options(cmd_opts);

    for in_file in inputs {
        let file = PPMFile::new(in_file.to_os_string(), options);

        match file.probe() {
            Ok((info, size)) => {
                let metadata = Metadata::new(in_file.to_os_string(), size, &info);
                println!("{}", serde_json::to_string_pretty(&metadata)?);
            }
            // one unreadable header should not hide the others
            Err(err) => warn!("Skipping {:?}: {:?}", in_file, err)
        }
    }
    Ok(())
}
