//! Panel switching plumbing.

/// The two demo panels of the teaching surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Rsa,
    Sha256,
}

impl Panel {
    /// Resolve a tab name from the host markup.
    pub fn from_tab(name: &str) -> Option<Panel> {
        match name {
            "rsa" => Some(Panel::Rsa),
            "sha256" => Some(Panel::Sha256),
            _ => None,
        }
    }

    pub fn tab_name(&self) -> &'static str {
        match self {
            Panel::Rsa => "rsa",
            Panel::Sha256 => "sha256",
        }
    }

    /// Id of the panel element shown when this tab is active.
    pub fn panel_id(&self) -> &'static str {
        match self {
            Panel::Rsa => "rsa-panel",
            Panel::Sha256 => "sha256-panel",
        }
    }
}
