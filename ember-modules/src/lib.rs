// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ember/blob/main/licenses/COPYRIGHT.md

//! Declarative deployment modules for EVM contracts.
//!
//! A deployment module names a contract, declares the parameters of its
//! instantiation, and describes the constructor arguments and the Ether value
//! attached at creation. Resolving a module against a run's parameter
//! overrides yields a concrete deployment plan for an external execution
//! engine to submit. Everything in this crate is a pure transformation; no
//! transaction ever leaves it.

pub mod core;
pub(crate) mod error;
pub mod ops;

pub use error::{Error, Result};
