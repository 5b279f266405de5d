/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::debug;
use tint_ppm::Image;

/// A tonal adjustment requested on the command line
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Operation {
    Lighten(u32),
    Darken(u32)
}

impl Operation {
    pub fn execute(self, image: &mut Image) {
        match self {
            Operation::Lighten(amount) => {
                debug!("Lightening image by {amount}");
                image.lighten(amount);
            }
            Operation::Darken(amount) => {
                debug!("Darkening image by {amount}");
                image.darken(amount);
            }
        }
    }
}

/// Collect operations in the order they were specified in the command line
pub fn ordered_operations(options: &ArgMatches) -> Vec<Operation> {
    let mut positioned = Vec::with_capacity(8);

    collect_operation(options, "lighten", Operation::Lighten, &mut positioned);
    collect_operation(options, "darken", Operation::Darken, &mut positioned);

    positioned.sort_by_key(|(index, _)| *index);
    positioned.into_iter().map(|(_, op)| op).collect()
}

fn collect_operation(
    options: &ArgMatches, id: &str, make: fn(u32) -> Operation,
    out: &mut Vec<(usize, Operation)>
) {
    if let (Some(indices), Some(values)) = (options.indices_of(id), options.get_many::<u32>(id)) {
        out.extend(indices.zip(values).map(|(index, value)| (index, make(*value))));
    }
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::operations::{ordered_operations, Operation};

    fn operations_for(args: &[&str]) -> Vec<Operation> {
        let mut full = vec!["tint", "-i", "in.ppm", "-o", "out.ppm"];
        full.extend_from_slice(args);

        let matches = create_cmd_args().try_get_matches_from(full).unwrap();
        ordered_operations(&matches)
    }

    #[test]
    fn test_no_operations() {
        assert!(operations_for(&[]).is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let ops = operations_for(&["--darken", "5", "--lighten", "20", "--darken", "1"]);

        assert_eq!(
            ops,
            vec![
                Operation::Darken(5),
                Operation::Lighten(20),
                Operation::Darken(1)
            ]
        );
    }

    #[test]
    fn test_missing_amount_uses_default_step() {
        let ops = operations_for(&["--lighten", "--darken", "7"]);

        assert_eq!(
            ops,
            vec![
                Operation::Lighten(tint_ppm::tone::DEFAULT_STEP),
                Operation::Darken(7)
            ]
        );
    }
}
