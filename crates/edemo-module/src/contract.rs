//! Contract of the external computation module.
//!
//! The module is opaque beyond its three call points. Each call point is
//! pure and returns a serialized record; decoding and classification of
//! that record happen downstream, not here.

use num_bigint::BigUint;
use std::fmt;

/// A fault raised by the module while servicing a call point.
///
/// The message is optional: some embeddings surface faults without any
/// detail attached, and the caller substitutes a generic message then.
#[derive(Debug, Clone)]
pub struct ModuleFault {
    pub message: Option<String>,
}

impl ModuleFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// A fault that carries no detail.
    pub fn unspecified() -> Self {
        Self { message: None }
    }
}

impl fmt::Display for ModuleFault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}", message),
            None => write!(f, "unspecified module fault"),
        }
    }
}

impl std::error::Error for ModuleFault {}

/// The three fixed call points of the loaded module.
///
/// Implementations must be pure: same inputs, same serialized record.
pub trait ComputationModule: Send + Sync {
    /// Run the RSA demonstration on a literal text message.
    fn rsa_demo_text(&self, text: &str, p: &BigUint, q: &BigUint) -> Result<String, ModuleFault>;

    /// Run the RSA demonstration on a numeric message.
    fn rsa_demo_number(
        &self,
        message: &BigUint,
        p: &BigUint,
        q: &BigUint,
    ) -> Result<String, ModuleFault>;

    /// Run the SHA-256 demonstration on a text message.
    fn sha256_demo_text(&self, text: &str) -> Result<String, ModuleFault>;
}

/// A single dispatch to one of the module's call points.
#[derive(Debug, Clone)]
pub enum ModuleCall {
    RsaText {
        text: String,
        p: BigUint,
        q: BigUint,
    },
    RsaNumber {
        message: BigUint,
        p: BigUint,
        q: BigUint,
    },
    Sha256Text {
        text: String,
    },
}

impl ModuleCall {
    /// Route the call to the matching call point.
    pub fn dispatch(&self, module: &dyn ComputationModule) -> Result<String, ModuleFault> {
        match self {
            ModuleCall::RsaText { text, p, q } => module.rsa_demo_text(text, p, q),
            ModuleCall::RsaNumber { message, p, q } => module.rsa_demo_number(message, p, q),
            ModuleCall::Sha256Text { text } => module.sha256_demo_text(text),
        }
    }

    /// Name of the targeted call point, for diagnostics.
    pub fn call_point(&self) -> &'static str {
        match self {
            ModuleCall::RsaText { .. } => "rsa_demo_text",
            ModuleCall::RsaNumber { .. } => "rsa_demo_number",
            ModuleCall::Sha256Text { .. } => "sha256_demo_text",
        }
    }
}
