//! In-memory double of the host environment.
//!
//! Used by tests across the workspace: fields are seeded up front, surface
//! writes and blocking notices are recorded for assertion.

use crate::HostEnv;
use std::collections::HashMap;
use std::sync::Mutex;

/// Test double recording every interaction with the host.
#[derive(Default)]
pub struct MemoryHost {
    fields: Mutex<HashMap<String, String>>,
    surfaces: Mutex<HashMap<String, String>>,
    notices: Mutex<Vec<String>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host that already renders the given surfaces (empty content).
    pub fn with_surfaces(ids: &[&str]) -> Self {
        let host = Self::new();
        for id in ids {
            host.add_surface(id);
        }
        host
    }

    pub fn set_field(&self, id: &str, value: &str) {
        self.fields
            .lock()
            .unwrap()
            .insert(id.to_string(), value.to_string());
    }

    pub fn add_surface(&self, id: &str) {
        self.surfaces
            .lock()
            .unwrap()
            .entry(id.to_string())
            .or_default();
    }

    /// Current content of a surface, `None` if the surface is not rendered.
    pub fn surface_content(&self, id: &str) -> Option<String> {
        self.surfaces.lock().unwrap().get(id).cloned()
    }

    /// Every blocking notice raised so far, oldest first.
    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

impl HostEnv for MemoryHost {
    fn read_field(&self, id: &str) -> String {
        self.fields.lock().unwrap().get(id).cloned().unwrap_or_default()
    }

    fn has_surface(&self, id: &str) -> bool {
        self.surfaces.lock().unwrap().contains_key(id)
    }

    fn write_surface(&self, id: &str, content: &str) {
        let mut surfaces = self.surfaces.lock().unwrap();
        // Writing to a surface the host never rendered is dropped, the way
        // a missing element swallows writes in a real embedding.
        if let Some(slot) = surfaces.get_mut(id) {
            *slot = content.to_string();
        }
    }

    fn notify(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_reads_empty() {
        let host = MemoryHost::new();
        assert_eq!(host.read_field("rsa-message"), "");
    }

    #[test]
    fn test_read_trimmed_strips_whitespace() {
        let host = MemoryHost::new();
        host.set_field("rsa-message", "  hello  ");
        assert_eq!(host.read_trimmed("rsa-message"), "hello");
        assert_eq!(host.read_field("rsa-message"), "  hello  ");
    }

    #[test]
    fn test_surface_write_replaces_content() {
        let host = MemoryHost::with_surfaces(&["rsa-results"]);
        host.write_surface("rsa-results", "first");
        host.write_surface("rsa-results", "second");
        assert_eq!(host.surface_content("rsa-results").unwrap(), "second");
    }

    #[test]
    fn test_write_to_missing_surface_is_dropped() {
        let host = MemoryHost::new();
        host.write_surface("rsa-results", "lost");
        assert!(!host.has_surface("rsa-results"));
        assert_eq!(host.surface_content("rsa-results"), None);
    }

    #[test]
    fn test_notices_are_recorded_in_order() {
        let host = MemoryHost::new();
        host.notify("first");
        host.notify("second");
        assert_eq!(host.notices(), vec!["first", "second"]);
    }
}
