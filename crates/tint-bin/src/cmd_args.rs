/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub(crate) mod help_strings;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::help_strings::{DARKEN_HELP, LIGHTEN_HELP, OPERATIONS_ORDER_HELP};

/// Step applied by `--lighten`/`--darken` when no amount is given
///
/// Must stay in sync with `tint_ppm::tone::DEFAULT_STEP`
pub(crate) const DEFAULT_STEP_ARG: &str = "50";

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("tint")
        .about("Lighten and darken plain (P3) PPM images")
        .after_help(OPERATIONS_ORDER_HELP)
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read data from")
            .long("input")
            .action(ArgAction::Append)
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the data to")
            .long_help("Output to write the data to.\nOutputs are paired with inputs in the order given")
            .action(ArgAction::Append)
            .required_unless_present("probe"))
        .arg(Arg::new("yes")
            .short('y')
            .long("yes")
            .action(ArgAction::SetTrue)
            .help("Overwrite output files that already exist"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print header information of the input files as JSON"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of an image the decoder will accept")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of an image the decoder will accept")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("line-length")
            .long("line-length")
            .help_heading("ADVANCED")
            .help("Longest line the encoder writes, 0 writes each image row on one line")
            .value_parser(value_parser!(usize))
            .default_value("70"))
        .arg(Arg::new("lighten")
            .long("lighten")
            .help_heading("OPERATIONS")
            .value_name("AMOUNT")
            .help("Lighten the image by AMOUNT")
            .long_help(LIGHTEN_HELP)
            .value_parser(value_parser!(u32))
            .num_args(0..=1)
            .default_missing_value(DEFAULT_STEP_ARG)
            .action(ArgAction::Append))
        .arg(Arg::new("darken")
            .long("darken")
            .help_heading("OPERATIONS")
            .value_name("AMOUNT")
            .help("Darken the image by AMOUNT")
            .long_help(DARKEN_HELP)
            .value_parser(value_parser!(u32))
            .num_args(0..=1)
            .default_missing_value(DEFAULT_STEP_ARG)
            .action(ArgAction::Append))
}
