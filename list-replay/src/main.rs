// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

mod cli;
mod replay;
mod script;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let opts = cli::options().run();

    tracing_subscriber::fmt()
        .with_max_level(opts.verbosity_level)
        .with_writer(std::io::stderr)
        .init();

    let script = script::read(&opts.script_path)
        .with_context(|| format!("Failed to load {}", opts.script_path.display()))?;
    let outcome = replay::replay(script);

    println!("{:?}", outcome.list);
    println!("{} operations failed", outcome.failures);

    Ok(())
}
