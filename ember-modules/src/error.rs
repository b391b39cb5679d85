// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ember/blob/main/licenses/COPYRIGHT.md

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Manifest(#[from] crate::core::manifest::ManifestError),
    #[error("{0}")]
    Run(#[from] crate::core::run::RunError),
    #[error("{0}")]
    Resolution(#[from] crate::core::resolver::ResolutionError),
}
