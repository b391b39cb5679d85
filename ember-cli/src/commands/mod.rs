// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ember/blob/main/licenses/COPYRIGHT.md

mod check;
mod plan;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Validate the module files in a directory
    #[clap(visible_alias = "c")]
    Check(check::Args),
    /// Resolve a deployment run and print the plan as JSON
    #[clap(visible_alias = "p")]
    Plan(plan::Args),
}

pub fn exec(cmd: Command) -> eyre::Result<()> {
    match cmd {
        Command::Check(args) => check::exec(args),
        Command::Plan(args) => plan::exec(args),
    }
}
