//! Application wiring: startup, trigger dispatch, panel state.

use crate::fields::{
    RSA_MESSAGE, RSA_P, RSA_Q, RSA_RESULTS, RSA_RUN_BUTTON, SHA256_MESSAGE, SHA256_RUN_BUTTON,
};
use crate::panel::Panel;
use crate::rsa::RsaDemo;
use crate::sha256::Sha256Demo;
use edemo_core::{run_demo, RunOutcome};
use edemo_host::{enter_triggers, HostEnv, KeyEvent};
use edemo_module::{BridgeError, ComputationModule, LoadError, ModuleBridge};
use std::future::Future;
use std::sync::Mutex;

/// Fixed message reported when the module cannot be loaded. Always routed
/// to the RSA results surface, whichever demo the user meant to run.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load the computation module.";

/// One running instance of the teaching tool.
///
/// Owns the module bridge and the host capability; both are shared
/// read-only with every demo invocation.
pub struct App<H: HostEnv> {
    bridge: ModuleBridge,
    host: H,
    active: Mutex<Panel>,
}

impl<H: HostEnv> App<H> {
    pub fn new(host: H) -> Self {
        Self {
            bridge: ModuleBridge::new(),
            host,
            active: Mutex::new(Panel::Rsa),
        }
    }

    /// Load the computation module, exactly once, at startup.
    ///
    /// Returns whether the app came up ready. A load failure reports the
    /// fixed message to the RSA results surface and leaves every later
    /// trigger answering with the still-loading notice. Defect-kind bridge
    /// errors (a second call on a loaded app) bubble out unchanged so the
    /// caller has to branch on them.
    pub async fn init<F>(&self, loader: F) -> Result<bool, BridgeError>
    where
        F: Future<Output = Result<Box<dyn ComputationModule>, LoadError>>,
    {
        match self.bridge.initialize(loader).await {
            Ok(()) => Ok(true),
            Err(BridgeError::LoadFailed(detail)) => {
                tracing::error!(detail = %detail, "failed to load computation module");
                if self.host.has_surface(RSA_RESULTS) {
                    self.host
                        .write_surface(RSA_RESULTS, &edemo_out::error_html(LOAD_FAILURE_MESSAGE));
                }
                Ok(false)
            }
            Err(defect) => Err(defect),
        }
    }

    pub fn bridge(&self) -> &ModuleBridge {
        &self.bridge
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Run the RSA demonstration once.
    pub fn run_rsa(&self) -> RunOutcome {
        run_demo(&RsaDemo, &self.bridge, &self.host)
    }

    /// Run the SHA-256 demonstration once.
    pub fn run_sha256(&self) -> RunOutcome {
        run_demo(&Sha256Demo, &self.bridge, &self.host)
    }

    /// Dispatch a run-button press.
    pub fn press_button(&self, id: &str) -> Option<RunOutcome> {
        match id {
            RSA_RUN_BUTTON => Some(self.run_rsa()),
            SHA256_RUN_BUTTON => Some(self.run_sha256()),
            _ => None,
        }
    }

    /// Dispatch a key press inside an input field.
    ///
    /// The RSA fields trigger on Enter regardless of Shift; the SHA-256
    /// message field leaves Shift+Enter to multi-line entry.
    pub fn key_press(&self, field: &str, event: &KeyEvent) -> Option<RunOutcome> {
        match field {
            RSA_MESSAGE | RSA_P | RSA_Q if enter_triggers(event, false) => Some(self.run_rsa()),
            SHA256_MESSAGE if enter_triggers(event, true) => Some(self.run_sha256()),
            _ => None,
        }
    }

    /// Switch the visible panel by tab name.
    pub fn switch_tab(&self, name: &str) -> Option<Panel> {
        let panel = Panel::from_tab(name)?;
        *self.active.lock().unwrap() = panel;
        Some(panel)
    }

    pub fn active_panel(&self) -> Panel {
        *self.active.lock().unwrap()
    }
}
