// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ember/blob/main/licenses/COPYRIGHT.md

//! Static validation of a modules directory.

use std::collections::HashSet;
use std::path::Path;

use crate::{
    core::{
        manifest,
        module::{ArgExpr, ModuleDescriptor},
        resolver::ResolutionError,
        run::DeploymentRun,
    },
    error::Result,
};

/// Loads and validates every module in `dir` without resolving anything.
///
/// Catches duplicate module names, duplicate parameter declarations and
/// references to undeclared parameters: authoring mistakes no override file
/// can repair.
pub fn check(dir: impl AsRef<Path>) -> Result<DeploymentRun> {
    let modules = manifest::load_dir(dir)?;
    let run = DeploymentRun::new(modules)?;
    for module in run.modules() {
        check_references(module)?;
    }
    log::info!("{} module(s) ok", run.modules().len());
    Ok(run)
}

fn check_references(module: &ModuleDescriptor) -> Result<(), ResolutionError> {
    let declared: HashSet<&str> = module.parameters.iter().map(|p| p.name.as_str()).collect();
    for expr in module.constructor_args.iter().chain(module.value.as_ref()) {
        if let ArgExpr::Param { param } = expr {
            if !declared.contains(param.as_str()) {
                return Err(ResolutionError::UnknownParameterReference {
                    module: module.name.clone(),
                    parameter: param.clone(),
                });
            }
        }
    }
    Ok(())
}
