// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ember/blob/main/licenses/COPYRIGHT.md

//! Module descriptors: the authored, config-time form of a deployment.

use serde::{Deserialize, Serialize};

use crate::core::value::Value;

/// A named input to a module, overridable per deployment run.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParameterDeclaration {
    /// Unique within the declaring module.
    pub name: String,
    /// Used when the run supplies no override. A parameter without a default
    /// must be overridden or resolution fails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

/// A constructor-argument or attached-value expression.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ArgExpr {
    /// `{ param = "name" }`: substituted with the resolved parameter.
    Param { param: String },
    /// Passed through unchanged.
    Literal(Value),
}

/// One self-contained deployment unit: a single contract instantiation with
/// parameterized constructor arguments and attached value.
///
/// Descriptors are plain data. They are authored once (usually in a TOML
/// file, see [`crate::core::manifest`]), validated as part of a
/// [`DeploymentRun`](crate::core::run::DeploymentRun), and resolved by
/// [`resolve`](crate::core::resolver::resolve).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModuleDescriptor {
    /// Unique across all modules of a run.
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterDeclaration>,
    /// Contract to instantiate, by name; the execution engine owns the
    /// mapping to bytecode and ABI.
    pub contract: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constructor_args: Vec<ArgExpr>,
    /// Ether attached to the instantiation, in wei.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ArgExpr>,
}
