/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};

use crate::cmd_parsers::operations::{ordered_operations, Operation};

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub max_width:      usize,
    pub max_height:     usize,
    pub line_length:    usize,
    pub override_files: bool,
    pub probe:          bool,
    pub operations:     Vec<Operation>
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            max_width:      0,
            max_height:     0,
            line_length:    0,
            override_files: false,
            probe:          false,
            operations:     vec![]
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    // all three have default values, so they are always present
    cmd_options.max_width = options.get_one::<usize>("max-width").copied().unwrap_or(1 << 14);
    cmd_options.max_height = options.get_one::<usize>("max-height").copied().unwrap_or(1 << 14);
    cmd_options.line_length = options.get_one::<usize>("line-length").copied().unwrap_or(70);

    if options.value_source("yes") == Some(ValueSource::CommandLine) {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    if options.get_flag("probe") {
        info!("Probing input files");
        cmd_options.probe = true;
    }
    cmd_options.operations = ordered_operations(options);

    info!("Operations: {:?}", cmd_options.operations);

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
