//! The descriptor contract every demo implements.

use crate::error::ComputeFault;
use crate::outcome::{ModuleOutcome, ValidationOutcome};
use edemo_host::HostEnv;
use edemo_module::ModuleBridge;

/// Static configuration of one demonstration.
///
/// The pipeline owns the sequencing; a descriptor supplies the four
/// capabilities it sequences plus the loading message and the id of the
/// surface it renders into. Descriptors are stateless: per-invocation data
/// lives in `Inputs`, created fresh on every trigger and dropped when the
/// run ends.
pub trait DemoDescriptor {
    /// Captured raw inputs of one invocation.
    type Inputs;
    /// Decoded success payload of the module call.
    type Output;

    /// Read the current field values from the host.
    fn collect(&self, host: &dyn HostEnv) -> Self::Inputs;

    /// Check the captured inputs; the reason renders inline on rejection.
    fn validate(&self, inputs: &Self::Inputs) -> ValidationOutcome;

    /// Call the module through the bridge and classify its output.
    fn compute(
        &self,
        inputs: &Self::Inputs,
        bridge: &ModuleBridge,
    ) -> Result<ModuleOutcome<Self::Output>, ComputeFault>;

    /// The HTML fragment that replaces the surface on success.
    fn render_success(&self, result: &Self::Output) -> Result<String, ComputeFault>;

    /// Message shown while the module computes.
    fn loading_message(&self) -> &str;

    /// Id of the display surface this demo renders into.
    fn surface_id(&self) -> &str;
}
