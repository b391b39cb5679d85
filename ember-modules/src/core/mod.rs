// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ember/blob/main/licenses/COPYRIGHT.md

pub mod manifest;
pub mod module;
pub mod resolver;
pub mod run;
pub mod value;
