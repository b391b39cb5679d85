// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ember/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use ember_modules::ops;
use eyre::bail;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Directory containing module descriptor files.
    modules_dir: PathBuf,
    /// Parameter override file applied on top of module defaults.
    #[arg(long, value_name = "FILE")]
    parameters: Option<PathBuf>,
}

pub fn exec(args: Args) -> eyre::Result<()> {
    let plan = ops::plan(&args.modules_dir, args.parameters.as_deref())?;

    // The plan goes to stdout for the execution engine; diagnostics stay on
    // the logger.
    println!("{}", serde_json::to_string_pretty(&plan.deployments)?);

    if !plan.is_complete() {
        bail!("{} module(s) failed to resolve", plan.failures.len());
    }
    Ok(())
}
