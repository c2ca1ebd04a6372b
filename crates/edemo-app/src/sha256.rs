//! The SHA-256 demonstration descriptor.

use crate::fields::{SHA256_MESSAGE, SHA256_RESULTS};
use edemo_core::{
    parse_result, validate, ComputeFault, DemoDescriptor, ModuleOutcome, ValidationOutcome,
};
use edemo_host::HostEnv;
use edemo_module::{ModuleBridge, ModuleCall};
use edemo_out::{render_sha256_results, Sha256Result};

/// Captured inputs of one SHA-256 invocation.
#[derive(Debug, Clone)]
pub struct Sha256Inputs {
    pub message: String,
}

pub struct Sha256Demo;

impl DemoDescriptor for Sha256Demo {
    type Inputs = Sha256Inputs;
    type Output = Sha256Result;

    fn collect(&self, host: &dyn HostEnv) -> Sha256Inputs {
        // Verbatim, not trimmed: the field is multi-line and whitespace is
        // part of the hashed message.
        Sha256Inputs {
            message: host.read_field(SHA256_MESSAGE),
        }
    }

    fn validate(&self, inputs: &Sha256Inputs) -> ValidationOutcome {
        validate::non_empty(&inputs.message, "a message")
    }

    fn compute(
        &self,
        inputs: &Sha256Inputs,
        bridge: &ModuleBridge,
    ) -> Result<ModuleOutcome<Sha256Result>, ComputeFault> {
        let raw = bridge.invoke(&ModuleCall::Sha256Text {
            text: inputs.message.clone(),
        })?;
        parse_result(&raw)
    }

    fn render_success(&self, result: &Sha256Result) -> Result<String, ComputeFault> {
        render_sha256_results(result).map_err(|e| ComputeFault::render(e.to_string()))
    }

    fn loading_message(&self) -> &str {
        "Computing hash..."
    }

    fn surface_id(&self) -> &str {
        SHA256_RESULTS
    }
}
