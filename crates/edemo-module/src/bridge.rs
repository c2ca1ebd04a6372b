//! Load-once lifecycle of the computation module.
//!
//! The bridge is the single owner of the module handle. Its state machine
//! has exactly two states, `Uninitialized` and `Ready`, and one legal
//! transition between them, taken on the first successful load. A failed
//! load leaves the bridge `Uninitialized` permanently; nothing retries it.

use crate::contract::{ComputationModule, ModuleCall, ModuleFault};
use once_cell::sync::OnceCell;
use std::future::Future;
use thiserror::Error;

/// Failure reported by a module loader.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct LoadError(pub String);

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, Error)]
pub enum BridgeError {
    /// The loader failed. The bridge stays `Uninitialized`.
    #[error("failed to load computation module: {0}")]
    LoadFailed(String),

    /// `initialize` was called on a bridge that is already `Ready`. The
    /// host process calls `initialize` exactly once at startup, so this is
    /// a programming-contract violation, never a user-facing condition.
    #[error("computation module already initialized")]
    AlreadyInitialized,

    /// A call point was dispatched before the bridge became `Ready`. The
    /// pipeline checks `is_ready` first, so reaching this is a defect.
    #[error("computation module not initialized")]
    NotInitialized,

    /// The module itself raised a fault while servicing the call.
    #[error(transparent)]
    Module(#[from] ModuleFault),
}

impl BridgeError {
    /// Defect-kind errors signal contract violations rather than
    /// recoverable conditions. Callers branch on this explicitly instead of
    /// folding defects into user-facing error paths.
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            BridgeError::AlreadyInitialized | BridgeError::NotInitialized
        )
    }
}

/// Owner of the module handle. Constructed once at process start and passed
/// to the pipeline by shared reference.
pub struct ModuleBridge {
    slot: OnceCell<Box<dyn ComputationModule>>,
}

impl ModuleBridge {
    pub fn new() -> Self {
        Self {
            slot: OnceCell::new(),
        }
    }

    /// Await the loader and take the `Uninitialized` → `Ready` transition.
    ///
    /// This is the only suspension point in the system's lifetime. On
    /// loader failure the state is untouched and the error is returned to
    /// the caller, which owns user-facing reporting.
    pub async fn initialize<F>(&self, loader: F) -> Result<(), BridgeError>
    where
        F: Future<Output = Result<Box<dyn ComputationModule>, LoadError>>,
    {
        if self.slot.get().is_some() {
            return Err(BridgeError::AlreadyInitialized);
        }
        let module = loader
            .await
            .map_err(|e| BridgeError::LoadFailed(e.to_string()))?;
        self.slot
            .set(module)
            .map_err(|_| BridgeError::AlreadyInitialized)?;
        tracing::info!("computation module loaded");
        Ok(())
    }

    /// Pure query of the current state.
    pub fn is_ready(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Dispatch one call point. Legal only once `Ready`; the module handle
    /// is shared read-only with every invocation after that.
    pub fn invoke(&self, call: &ModuleCall) -> Result<String, BridgeError> {
        let module = self.slot.get().ok_or(BridgeError::NotInitialized)?;
        tracing::debug!(call_point = call.call_point(), "dispatching module call");
        call.dispatch(module.as_ref()).map_err(BridgeError::Module)
    }
}

impl Default for ModuleBridge {
    fn default() -> Self {
        Self::new()
    }
}
