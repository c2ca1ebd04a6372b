//! Host-environment capability.
//!
//! Field reading and surface writing belong to the embedding environment,
//! not to this workspace. The demos only ever touch the host through the
//! [`HostEnv`] capability: read a named input field, resolve and replace a
//! named display surface, raise a blocking notice. Tests substitute the
//! in-memory [`MemoryHost`] double.

pub mod keys;
pub mod memory;

pub use keys::{enter_triggers, KeyEvent};
pub use memory::MemoryHost;

/// Capability supplied by the embedding environment.
///
/// Surface writes are wholesale: the new content replaces whatever the
/// surface held before. Nothing in this workspace appends.
pub trait HostEnv {
    /// Current raw value of a named input field. Missing fields read as
    /// the empty string.
    fn read_field(&self, id: &str) -> String;

    /// Whether a named display surface is currently present.
    fn has_surface(&self, id: &str) -> bool;

    /// Replace the entire content of a named display surface.
    fn write_surface(&self, id: &str, content: &str);

    /// Raise a blocking, synchronous notice to the user.
    fn notify(&self, message: &str);

    /// Field value with surrounding whitespace removed.
    fn read_trimmed(&self, id: &str) -> String {
        self.read_field(id).trim().to_string()
    }
}
