// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ember/blob/main/licenses/COPYRIGHT.md

//! Run resolution: from authored module files and an optional override file
//! to the plan handed to the execution engine.

use std::path::Path;

use crate::{
    core::{
        manifest,
        resolver::{ResolutionError, ResolvedDeployment},
        run::RunOverrides,
    },
    error::Result,
    ops,
};

/// Outcome of resolving one run.
#[derive(Debug)]
pub struct RunPlan {
    /// Plans for the modules that resolved, in module-file order.
    pub deployments: Vec<ResolvedDeployment>,
    /// Modules that failed to resolve. Failures are independent; a module
    /// missing a parameter never blocks the rest of the run.
    pub failures: Vec<ResolutionError>,
}

impl RunPlan {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Resolves every module in `dir` against the overrides in
/// `parameters_file`, if one is given.
pub fn plan(dir: impl AsRef<Path>, parameters_file: Option<&Path>) -> Result<RunPlan> {
    let run = ops::check(dir)?;
    let overrides = match parameters_file {
        Some(path) => manifest::load_overrides(path)?,
        None => RunOverrides::new(),
    };

    let mut deployments = Vec::new();
    let mut failures = Vec::new();
    for result in run.resolve(&overrides) {
        match result {
            Ok(deployment) => {
                log::info!(
                    "module {}: deploy contract {}",
                    deployment.module,
                    deployment.contract,
                );
                deployments.push(deployment);
            }
            Err(err) => {
                log::warn!("{err}");
                failures.push(err);
            }
        }
    }
    Ok(RunPlan {
        deployments,
        failures,
    })
}
