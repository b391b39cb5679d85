// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ember/blob/main/licenses/COPYRIGHT.md

//! Module descriptor files: one module per file, wrapped in a `[module]`
//! table.
//!
//! ```toml
//! [module]
//! name = "StakeEthModule"
//! contract = "StakeEther"
//! value = { param = "initialBalance" }
//!
//! [[module.parameters]]
//! name = "initialBalance"
//! default = "10000000000000000000"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{
    manifest::{self, ManifestError, EXTENSION},
    module::ModuleDescriptor,
};

#[derive(Debug, Deserialize, Serialize)]
pub struct ModuleManifest {
    pub module: ModuleDescriptor,
}

/// Loads every module file in `dir`, sorted by file name so the composition
/// of a run does not depend on directory iteration order.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<Vec<ModuleDescriptor>, ManifestError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(ManifestError::Missing(dir.display().to_string()));
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == EXTENSION) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut modules = Vec::with_capacity(paths.len());
    for path in &paths {
        log::debug!("loading module file {}", path.display());
        let manifest: ModuleManifest = manifest::load(path)?;
        modules.push(manifest.module);
    }
    Ok(modules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{module::ArgExpr, value::Value};

    #[test]
    fn module_file_round_trips_through_toml() {
        let manifest: ModuleManifest = toml::from_str(
            r#"
            [module]
            name = "StakeERC20Module"
            contract = "StakeERC20"
            constructor_args = [{ param = "stakingTokenAddress" }]

            [[module.parameters]]
            name = "stakingTokenAddress"
            "#,
        )
        .unwrap();

        let module = &manifest.module;
        assert_eq!(module.name, "StakeERC20Module");
        assert_eq!(module.contract, "StakeERC20");
        assert_eq!(module.parameters.len(), 1);
        assert_eq!(module.parameters[0].name, "stakingTokenAddress");
        assert_eq!(module.parameters[0].default, None);
        assert!(matches!(
            &module.constructor_args[0],
            ArgExpr::Param { param } if param == "stakingTokenAddress",
        ));
        assert!(module.value.is_none());
    }

    #[test]
    fn literal_args_deserialize_next_to_references() {
        let manifest: ModuleManifest = toml::from_str(
            r#"
            [module]
            name = "ERC20TokenModule"
            contract = "ERC"
            constructor_args = ["Ember", 18, { param = "initialSupply" }]

            [[module.parameters]]
            name = "initialSupply"
            default = "1000000000000000000000000"
            "#,
        )
        .unwrap();

        let args = &manifest.module.constructor_args;
        assert!(matches!(&args[0], ArgExpr::Literal(Value::String(s)) if s == "Ember"));
        assert!(matches!(&args[1], ArgExpr::Literal(v) if *v == Value::uint(18u64)));
        assert!(matches!(&args[2], ArgExpr::Param { param } if param == "initialSupply"));
    }

    #[test]
    fn load_dir_sorts_by_file_name() {
        let dir = tempfile::tempdir().unwrap();
        for (file, name) in [
            ("02_stake_eth.toml", "StakeEthModule"),
            ("01_erc20.toml", "ERC20TokenModule"),
            ("notes.txt", "ignored"),
        ] {
            let contents = format!("[module]\nname = \"{name}\"\ncontract = \"C\"\n");
            std::fs::write(dir.path().join(file), contents).unwrap();
        }

        let modules = load_dir(dir.path()).unwrap();
        let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["ERC20TokenModule", "StakeEthModule"]);
    }

    #[test]
    fn missing_dir_is_reported() {
        let err = load_dir("does/not/exist").unwrap_err();
        assert!(matches!(err, ManifestError::Missing(_)));
    }
}
