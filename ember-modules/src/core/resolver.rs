// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ember/blob/main/licenses/COPYRIGHT.md

//! Resolution of a module descriptor into a concrete deployment plan.

use std::collections::HashMap;

use alloy_primitives::U256;
use serde::{Serialize, Serializer};

use crate::core::{
    module::{ArgExpr, ModuleDescriptor},
    value::Value,
};

/// Parameter overrides for one module, supplied at run time.
pub type Overrides = HashMap<String, Value>;

/// Concrete deployment plan for one module, handed to the execution engine.
/// Immutable once produced; the engine consumes it exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDeployment {
    pub module: String,
    pub contract: String,
    pub constructor_args: Vec<Value>,
    /// Wei attached to the instantiation transaction.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_wei")]
    pub value: Option<U256>,
}

fn serialize_wei<S: Serializer>(value: &Option<U256>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(wei) => serializer.serialize_str(&wei.to_string()),
        None => serializer.serialize_none(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("module {module}: parameter {parameter} has no default and no override")]
    MissingParameter { module: String, parameter: String },
    #[error("module {module}: reference to undeclared parameter {parameter}")]
    UnknownParameterReference { module: String, parameter: String },
    #[error("module {module}: attached value must be an integer amount of wei")]
    NonNumericValue { module: String },
}

impl ResolutionError {
    /// Module whose resolution failed.
    pub fn module(&self) -> &str {
        match self {
            Self::MissingParameter { module, .. }
            | Self::UnknownParameterReference { module, .. }
            | Self::NonNumericValue { module } => module,
        }
    }
}

/// Resolves a module against the run's overrides for it.
///
/// Parameters resolve in declaration order: an override wins over the
/// declared default, and a parameter with neither fails the module.
/// Substitution into the constructor arguments and the attached value
/// happens only once every parameter has a concrete value. Pure; identical
/// inputs yield field-for-field identical plans, so a dry run can be
/// replayed before submission.
pub fn resolve(
    descriptor: &ModuleDescriptor,
    overrides: &Overrides,
) -> Result<ResolvedDeployment, ResolutionError> {
    let mut resolved: HashMap<&str, &Value> = HashMap::with_capacity(descriptor.parameters.len());
    for parameter in &descriptor.parameters {
        let value = overrides
            .get(&parameter.name)
            .or(parameter.default.as_ref())
            .ok_or_else(|| ResolutionError::MissingParameter {
                module: descriptor.name.clone(),
                parameter: parameter.name.clone(),
            })?;
        resolved.insert(parameter.name.as_str(), value);
    }
    warn_unused(descriptor, overrides, &resolved);

    let mut constructor_args = Vec::with_capacity(descriptor.constructor_args.len());
    for arg in &descriptor.constructor_args {
        constructor_args.push(substitute(&descriptor.name, &resolved, arg)?.clone());
    }

    let value = match &descriptor.value {
        Some(expr) => {
            let value = substitute(&descriptor.name, &resolved, expr)?;
            Some(
                value
                    .as_uint()
                    .ok_or_else(|| ResolutionError::NonNumericValue {
                        module: descriptor.name.clone(),
                    })?,
            )
        }
        None => None,
    };

    Ok(ResolvedDeployment {
        module: descriptor.name.clone(),
        contract: descriptor.contract.clone(),
        constructor_args,
        value,
    })
}

fn substitute<'v>(
    module: &str,
    resolved: &HashMap<&str, &'v Value>,
    expr: &'v ArgExpr,
) -> Result<&'v Value, ResolutionError> {
    match expr {
        ArgExpr::Literal(value) => Ok(value),
        ArgExpr::Param { param } => resolved.get(param.as_str()).copied().ok_or_else(|| {
            ResolutionError::UnknownParameterReference {
                module: module.to_owned(),
                parameter: param.clone(),
            }
        }),
    }
}

/// Overrides naming parameters the module never declares are ignored, but
/// loudly; sorted so the warnings come out in a stable order.
fn warn_unused(
    descriptor: &ModuleDescriptor,
    overrides: &Overrides,
    resolved: &HashMap<&str, &Value>,
) {
    let mut unused: Vec<&str> = overrides
        .keys()
        .map(String::as_str)
        .filter(|name| !resolved.contains_key(name))
        .collect();
    unused.sort_unstable();
    for name in unused {
        log::warn!(
            "module {}: override for undeclared parameter {name} ignored",
            descriptor.name,
        );
    }
}
