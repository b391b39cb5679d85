// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ember/blob/main/licenses/COPYRIGHT.md

//! A deployment run: the validated, ordered set of modules resolved together.

use std::collections::{HashMap, HashSet};

use crate::core::{
    module::ModuleDescriptor,
    resolver::{self, Overrides, ResolutionError, ResolvedDeployment},
};

/// Overrides file contents: module name -> parameter overrides.
pub type RunOverrides = HashMap<String, Overrides>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    #[error("duplicate module name {module}")]
    DuplicateModuleName { module: String },
    #[error("module {module}: parameter {parameter} declared twice")]
    DuplicateParameter { module: String, parameter: String },
}

/// The ordered set of modules for one deployment run.
///
/// Construction validates name uniqueness before any module resolves, so a
/// misauthored run never produces a partial plan.
#[derive(Debug, Clone)]
pub struct DeploymentRun {
    modules: Vec<ModuleDescriptor>,
}

impl DeploymentRun {
    pub fn new(modules: Vec<ModuleDescriptor>) -> Result<Self, RunError> {
        let mut names = HashSet::new();
        for module in &modules {
            if !names.insert(module.name.as_str()) {
                return Err(RunError::DuplicateModuleName {
                    module: module.name.clone(),
                });
            }
            let mut parameters = HashSet::new();
            for parameter in &module.parameters {
                if !parameters.insert(parameter.name.as_str()) {
                    return Err(RunError::DuplicateParameter {
                        module: module.name.clone(),
                        parameter: parameter.name.clone(),
                    });
                }
            }
        }
        Ok(Self { modules })
    }

    pub fn modules(&self) -> &[ModuleDescriptor] {
        &self.modules
    }

    /// Resolves every module independently, in run order. One module's
    /// failure leaves the other plans intact; each error names the module it
    /// belongs to.
    pub fn resolve(
        &self,
        overrides: &RunOverrides,
    ) -> Vec<Result<ResolvedDeployment, ResolutionError>> {
        self.warn_unknown_modules(overrides);
        let empty = Overrides::new();
        self.modules
            .iter()
            .map(|module| {
                let module_overrides = overrides.get(&module.name).unwrap_or(&empty);
                resolver::resolve(module, module_overrides)
            })
            .collect()
    }

    fn warn_unknown_modules(&self, overrides: &RunOverrides) {
        let known: HashSet<&str> = self.modules.iter().map(|m| m.name.as_str()).collect();
        let mut unknown: Vec<&str> = overrides
            .keys()
            .map(String::as_str)
            .filter(|name| !known.contains(name))
            .collect();
        unknown.sort_unstable();
        for name in unknown {
            log::warn!("overrides for unknown module {name} ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        module::{ArgExpr, ParameterDeclaration},
        value::Value,
    };

    fn module(name: &str, contract: &str) -> ModuleDescriptor {
        ModuleDescriptor {
            name: name.to_owned(),
            parameters: vec![],
            contract: contract.to_owned(),
            constructor_args: vec![],
            value: None,
        }
    }

    #[test]
    fn duplicate_module_names_fail_before_resolution() {
        let err = DeploymentRun::new(vec![
            module("StakeEthModule", "StakeEther"),
            module("StakeEthModule", "StakeEther"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RunError::DuplicateModuleName {
                module: "StakeEthModule".to_owned(),
            },
        );
    }

    #[test]
    fn duplicate_parameters_fail_before_resolution() {
        let mut descriptor = module("ERC20TokenModule", "ERC");
        descriptor.parameters = vec![
            ParameterDeclaration {
                name: "initialSupply".to_owned(),
                default: Some(Value::uint(1u64)),
            },
            ParameterDeclaration {
                name: "initialSupply".to_owned(),
                default: None,
            },
        ];
        let err = DeploymentRun::new(vec![descriptor]).unwrap_err();
        assert_eq!(
            err,
            RunError::DuplicateParameter {
                module: "ERC20TokenModule".to_owned(),
                parameter: "initialSupply".to_owned(),
            },
        );
    }

    #[test]
    fn failures_do_not_affect_other_modules() {
        let mut needs_override = module("StakeERC20Module", "StakeERC20");
        needs_override.parameters = vec![ParameterDeclaration {
            name: "stakingTokenAddress".to_owned(),
            default: None,
        }];
        needs_override.constructor_args = vec![ArgExpr::Param {
            param: "stakingTokenAddress".to_owned(),
        }];

        let run = DeploymentRun::new(vec![module("ERC20TokenModule", "ERC"), needs_override])
            .unwrap();
        let outcomes = run.resolve(&RunOverrides::new());
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].as_ref().unwrap().contract, "ERC");
        assert_eq!(
            outcomes[1].as_ref().unwrap_err().module(),
            "StakeERC20Module",
        );
    }
}
