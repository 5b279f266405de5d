/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::path::Path;

use clap::ArgMatches;
use log::{debug, info};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::cmd_parsers::{get_decoder_options, get_encoder_options};
use crate::errors::CmdErrors;
use crate::file_io::{write_image, PPMFile};
use crate::probe_files::probe_input_files;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), CmdErrors> {
    if cmd_opts.probe {
        probe_input_files(args, cmd_opts)?;
    }

    let (Some(inputs), Some(outputs)) = (args.get_raw("in"), args.get_raw("out")) else {
        // probe only run
        return Ok(());
    };
    let inputs: Vec<&OsStr> = inputs.collect();
    let outputs: Vec<&OsStr> = outputs.collect();

    if inputs.len() != outputs.len() {
        return Err(CmdErrors::Generic(format!(
            "Got {} input files but {} output files, each input needs an output",
            inputs.len(),
            outputs.len()
        )));
    }
    info!("Creating workflows from input");

    for (in_file, out_file) in inputs.into_iter().zip(outputs) {
        run_file(in_file, out_file, cmd_opts)?;
    }
    Ok(())
}

/// Decode one file, run every operation on it and write the result
pub(crate) fn run_file(in_file: &OsStr, out_file: &OsStr, cmd_opts: &CmdOptions) -> Result<(), CmdErrors> {
    verify_file_paths(in_file, out_file, cmd_opts)?;

    debug!("Decoding {:?}", in_file);
    let mut image = PPMFile::new(in_file.to_os_string(), get_decoder_options(cmd_opts)).into_image()?;

    for operation in &cmd_opts.operations {
        operation.execute(&mut image);
    }

    let written = write_image(out_file, &image, get_encoder_options(cmd_opts))?;
    info!("Wrote {} bytes to {:?}", written, out_file);

    Ok(())
}

fn verify_file_paths(in_file: &OsStr, out_file: &OsStr, cmd_opts: &CmdOptions) -> Result<(), CmdErrors> {
    let in_path = Path::new(in_file);
    let out_path = Path::new(out_file);

    if !in_path.exists() {
        return Err(CmdErrors::Generic(format!("File {:?} does not exist", in_path)));
    }
    if !in_path.is_file() {
        return Err(CmdErrors::Generic(format!("Path {:?} is not a file", in_path)));
    }
    if in_path == out_path {
        return Err(CmdErrors::Generic(format!(
            "Input and output are the same file {:?}",
            in_path
        )));
    }
    if out_path.exists() && !cmd_opts.override_files {
        return Err(CmdErrors::Generic(format!(
            "Output {:?} already exists, use --yes to overwrite it",
            out_path
        )));
    }
    Ok(())
}
