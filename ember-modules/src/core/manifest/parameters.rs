// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ember/blob/main/licenses/COPYRIGHT.md

//! Parameter override files: one table per module, keyed by parameter name.
//!
//! ```toml
//! [StakeEthModule]
//! initialBalance = "25000000000000000000"
//!
//! [StakeERC20Module]
//! stakingTokenAddress = "0xEC824d6122f5D63A41Cb6AB8839362f342e2b35F"
//! ```

use std::path::Path;

use crate::core::{
    manifest::{self, ManifestError},
    run::RunOverrides,
};

/// Loads a run's override file.
pub fn load_overrides(path: impl AsRef<Path>) -> Result<RunOverrides, ManifestError> {
    manifest::load(path)
}
