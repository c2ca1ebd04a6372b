//! The RSA demonstration descriptor.

use crate::fields::{self, RSA_MESSAGE, RSA_P, RSA_Q, RSA_RESULTS};
use edemo_core::{
    parse_result, validate, ComputeFault, DemoDescriptor, ModuleOutcome, ValidationOutcome,
};
use edemo_host::HostEnv;
use edemo_module::{ModuleBridge, ModuleCall};
use edemo_out::{render_rsa_results, RsaResult};

/// Rejection message when either prime field fails to parse.
pub const PRIME_FIELDS_MESSAGE: &str = "Please enter valid prime numbers";

/// Captured inputs of one RSA invocation.
#[derive(Debug, Clone)]
pub struct RsaInputs {
    pub message: String,
    pub p: Option<num_bigint::BigUint>,
    pub q: Option<num_bigint::BigUint>,
}

pub struct RsaDemo;

impl DemoDescriptor for RsaDemo {
    type Inputs = RsaInputs;
    type Output = RsaResult;

    fn collect(&self, host: &dyn HostEnv) -> RsaInputs {
        RsaInputs {
            message: host.read_trimmed(RSA_MESSAGE),
            p: fields::parse_biguint(&host.read_field(RSA_P)),
            q: fields::parse_biguint(&host.read_field(RSA_Q)),
        }
    }

    fn validate(&self, inputs: &RsaInputs) -> ValidationOutcome {
        // First failing check wins; the message content itself is not
        // classified here.
        let message_check = validate::non_empty(&inputs.message, "a message");
        if !message_check.is_valid() {
            return message_check;
        }
        validate::all_present(&[&inputs.p, &inputs.q], PRIME_FIELDS_MESSAGE)
    }

    fn compute(
        &self,
        inputs: &RsaInputs,
        bridge: &ModuleBridge,
    ) -> Result<ModuleOutcome<RsaResult>, ComputeFault> {
        let (p, q) = match (&inputs.p, &inputs.q) {
            (Some(p), Some(q)) => (p.clone(), q.clone()),
            _ => return Err(ComputeFault::defect("prime fields reached compute unvalidated")),
        };

        // A digit-only message always goes down the numeric path; this demo
        // cannot submit a digit string as literal text.
        let call = if fields::is_numeric_string(&inputs.message) {
            let message = fields::parse_biguint(&inputs.message)
                .ok_or_else(|| ComputeFault::defect("digit-only message failed to parse"))?;
            ModuleCall::RsaNumber { message, p, q }
        } else {
            ModuleCall::RsaText {
                text: inputs.message.clone(),
                p,
                q,
            }
        };

        let raw = bridge.invoke(&call)?;
        parse_result(&raw)
    }

    fn render_success(&self, result: &RsaResult) -> Result<String, ComputeFault> {
        render_rsa_results(result).map_err(|e| ComputeFault::render(e.to_string()))
    }

    fn loading_message(&self) -> &str {
        "Processing..."
    }

    fn surface_id(&self) -> &str {
        RSA_RESULTS
    }
}
