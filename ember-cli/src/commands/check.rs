// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ember/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use ember_modules::ops;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Directory containing module descriptor files.
    modules_dir: PathBuf,
}

pub fn exec(args: Args) -> eyre::Result<()> {
    ops::check(&args.modules_dir)?;
    Ok(())
}
