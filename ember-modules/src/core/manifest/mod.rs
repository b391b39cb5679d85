// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ember/blob/main/licenses/COPYRIGHT.md

//! Loading of authored TOML files: module descriptors and run overrides.

use std::{fs, path::Path};

use serde::de::DeserializeOwned;

pub mod module;
pub mod parameters;

pub use module::{load_dir, ModuleManifest};
pub use parameters::load_overrides;

/// Extension of module files within a modules directory.
pub const EXTENSION: &str = "toml";

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("missing manifest: {0}")]
    Missing(String),
}

pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ManifestError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ManifestError::Missing(path.display().to_string()));
    }

    let contents = fs::read_to_string(path)?;
    let manifest = toml::from_str(&contents)?;
    Ok(manifest)
}
