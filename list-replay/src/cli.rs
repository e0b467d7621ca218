// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use bpaf::{batteries::verbose_by_slice, construct, long, OptionParser, Parser};
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone)]
pub struct Options {
    pub verbosity_level: LevelFilter,
    pub script_path: PathBuf,
}

pub fn options() -> OptionParser<Options> {
    let verbosity_level = verbose_by_slice(
        3,
        [
            LevelFilter::OFF,
            LevelFilter::ERROR,
            LevelFilter::WARN,
            LevelFilter::INFO,
            LevelFilter::DEBUG,
            LevelFilter::TRACE,
        ],
    );

    let script_path = long("script")
        .help("Selects the JSON file with the capacity policy and operations to replay")
        .argument("FILE")
        .complete_shell(bpaf::ShellComp::File {
            mask: Some("*.json"),
        });

    construct!(Options {
        verbosity_level,
        script_path
    })
    .to_options()
    .descr("Replays a script of list operations and prints the resulting list")
}
