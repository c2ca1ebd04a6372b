//! Computation-module lifecycle and contract.
//!
//! The RSA and SHA-256 arithmetic lives in a precompiled module supplied by
//! the embedding environment. This crate defines the shape of that
//! collaborator (three fixed call points, each returning a serialized result
//! record) and owns its lifecycle: the module is loaded exactly once at
//! process start, and every later dispatch goes through the readiness check
//! of [`ModuleBridge`].

pub mod bridge;
pub mod contract;

pub use bridge::{BridgeError, LoadError, ModuleBridge};
pub use contract::{ComputationModule, ModuleCall, ModuleFault};
