// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ember/blob/main/licenses/COPYRIGHT.md

pub use check::check;
pub use plan::{plan, RunPlan};

mod check;
mod plan;
