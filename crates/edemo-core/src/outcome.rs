//! Outcome types for validation, computation, and a full pipeline run.

/// Result of checking captured inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    /// The reason renders inline in the display surface.
    Invalid(String),
}

impl ValidationOutcome {
    pub fn invalid(reason: impl Into<String>) -> Self {
        ValidationOutcome::Invalid(reason.into())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// The rejection reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(reason) => Some(reason),
        }
    }
}

/// Classified module output: either the decoded payload or the failure
/// message the module reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleOutcome<R> {
    Success(R),
    Failure(String),
}

impl<R> ModuleOutcome<R> {
    pub fn is_success(&self) -> bool {
        matches!(self, ModuleOutcome::Success(_))
    }
}

/// What a single pipeline invocation did. Exactly one of these occurs per
/// trigger; only `Rejected`, `Failed`, and `Rendered` mutate the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Blocking notice raised; the module is still loading.
    NotReady,
    /// The target surface is not rendered; aborted with a diagnostic log.
    SurfaceMissing,
    /// Input validation failed; the reason rendered inline.
    Rejected(String),
    /// The computation faulted or the module reported failure; the message
    /// rendered inline.
    Failed(String),
    /// The success renderer replaced the surface content.
    Rendered,
}

impl RunOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RunOutcome::Rendered)
    }
}
