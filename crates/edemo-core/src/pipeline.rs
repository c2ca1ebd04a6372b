//! The generic demo pipeline.

use crate::descriptor::DemoDescriptor;
use crate::error::ComputeFault;
use crate::outcome::{ModuleOutcome, RunOutcome, ValidationOutcome};
use edemo_host::HostEnv;
use edemo_module::ModuleBridge;

/// Blocking notice raised when a demo is triggered before the module
/// finished loading.
pub const STILL_LOADING_NOTICE: &str = "The computation module is still loading. Please wait.";

/// Run one demonstration from trigger to rendered surface.
///
/// Synchronous from end to end; the only asynchronous operation in the
/// system is the module load, which happened (or permanently failed) before
/// any trigger can reach this point. Steps short-circuit in order, so for
/// any single invocation exactly one of the [`RunOutcome`] variants occurs.
pub fn run_demo<D: DemoDescriptor>(
    demo: &D,
    bridge: &ModuleBridge,
    host: &dyn HostEnv,
) -> RunOutcome {
    if !bridge.is_ready() {
        host.notify(STILL_LOADING_NOTICE);
        return RunOutcome::NotReady;
    }

    let inputs = demo.collect(host);

    let surface = demo.surface_id();
    if !host.has_surface(surface) {
        // Required UI not rendered yet; nothing user-visible to do.
        tracing::error!(surface, "results surface not found");
        return RunOutcome::SurfaceMissing;
    }

    if let ValidationOutcome::Invalid(reason) = demo.validate(&inputs) {
        host.write_surface(surface, &edemo_out::error_html(&reason));
        return RunOutcome::Rejected(reason);
    }

    host.write_surface(surface, &edemo_out::loading_html(demo.loading_message()));

    match demo.compute(&inputs, bridge) {
        Ok(ModuleOutcome::Success(result)) => match demo.render_success(&result) {
            Ok(html) => {
                host.write_surface(surface, &html);
                RunOutcome::Rendered
            }
            Err(fault) => fail(host, surface, fault),
        },
        Ok(ModuleOutcome::Failure(message)) => {
            // The module reported structured failure; its message renders
            // with the shared inline convention.
            host.write_surface(surface, &edemo_out::error_html(&message));
            RunOutcome::Failed(message)
        }
        Err(fault) => fail(host, surface, fault),
    }
}

fn fail(host: &dyn HostEnv, surface: &str, fault: ComputeFault) -> RunOutcome {
    tracing::error!(error = %fault, "demo computation fault");
    let message = fault.user_message();
    host.write_surface(surface, &edemo_out::error_html(&message));
    RunOutcome::Failed(message)
}
