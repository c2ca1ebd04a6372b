//! The interactive teaching tool, assembled.
//!
//! Binds the generic pipeline to the two concrete demonstrations: RSA key
//! generation / encryption / decryption and SHA-256 hashing. The embedding
//! environment supplies a [`edemo_host::HostEnv`] and a module loader;
//! everything else is wired here.
//!
//! # Example
//!
//! ```ignore
//! use edemo_app::App;
//!
//! let app = App::new(host);
//! app.init(load_module()).await?;
//! app.run_rsa();
//! ```

pub mod app;
pub mod fields;
pub mod panel;
pub mod rsa;
pub mod sha256;

pub use app::{App, LOAD_FAILURE_MESSAGE};
pub use panel::Panel;
pub use rsa::{RsaDemo, RsaInputs, PRIME_FIELDS_MESSAGE};
pub use sha256::{Sha256Demo, Sha256Inputs};
