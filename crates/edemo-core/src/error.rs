//! Fault taxonomy of the compute step.

use edemo_module::{BridgeError, ModuleFault};
use thiserror::Error;

/// Inline message used when a fault carries no detail of its own.
pub const GENERIC_FAULT_MESSAGE: &str = "An unknown error occurred";

/// An unexpected fault raised between the module call and the rendered
/// result. Distinct from [`crate::ModuleOutcome::Failure`], which is the
/// module reporting structured failure on its own terms.
#[derive(Debug, Error)]
pub enum ComputeFault {
    /// The module raised a fault while servicing the call.
    #[error("{0}")]
    Module(ModuleFault),

    /// The module's output record could not be decoded.
    #[error("malformed module output: {0}")]
    MalformedOutput(#[from] serde_json::Error),

    /// The success renderer failed.
    #[error("render failed: {0}")]
    Render(String),

    /// A pipeline-contract violation surfaced mid-computation, e.g. a
    /// dispatch that slipped past the readiness check.
    #[error("defect: {0}")]
    Defect(String),
}

impl ComputeFault {
    pub fn render(message: impl Into<String>) -> Self {
        ComputeFault::Render(message.into())
    }

    pub fn defect(message: impl Into<String>) -> Self {
        ComputeFault::Defect(message.into())
    }

    /// The message rendered inline: the fault's own detail when it has
    /// one, the fixed generic message otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ComputeFault::Module(fault) => fault
                .message
                .clone()
                .unwrap_or_else(|| GENERIC_FAULT_MESSAGE.to_string()),
            ComputeFault::MalformedOutput(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<BridgeError> for ComputeFault {
    fn from(err: BridgeError) -> Self {
        match err {
            BridgeError::Module(fault) => ComputeFault::Module(fault),
            other => ComputeFault::Defect(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edemo_module::ModuleFault;

    #[test]
    fn test_module_fault_message_is_surfaced() {
        let fault = ComputeFault::from(BridgeError::Module(ModuleFault::new("bad prime")));
        assert_eq!(fault.user_message(), "bad prime");
    }

    #[test]
    fn test_detail_free_fault_uses_generic_message() {
        let fault = ComputeFault::from(BridgeError::Module(ModuleFault::unspecified()));
        assert_eq!(fault.user_message(), GENERIC_FAULT_MESSAGE);
    }

    #[test]
    fn test_bridge_defects_map_to_defect_kind() {
        let fault = ComputeFault::from(BridgeError::NotInitialized);
        assert!(matches!(fault, ComputeFault::Defect(_)));
    }
}
