//! Error types for tree construction and execution.

use crate::descriptor::ContextDescriptor;
use thiserror::Error;

/// Stable name carried by every nesting violation.
pub const INVALID_DSL: &str = "Invalid DSL Exception";

/// A failure raised by a declarative operation.
///
/// Every variant is raised before the tree is touched, so the group that was
/// current when the operation was attempted is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DslError {
    /// A construct was used somewhere it may not nest. The message is matched
    /// verbatim by external harnesses, trailing space included.
    #[error("'{attempted}' cannot be used inside '{enclosing}', '{attempted}' may only be used inside 'context' or 'describe'. ")]
    InvalidDsl {
        attempted: ContextDescriptor,
        enclosing: ContextDescriptor,
    },

    #[error("unknown shared example '{0}'")]
    UnknownSharedExample(String),

    #[error("shared example '{0}' is already registered")]
    DuplicateSharedExample(String),

    #[error("cannot register shared example '{0}': shared examples are read-only once a spec has been built")]
    SharedExamplesSealed(String),

    /// A structural operation ran with no group to attach to, i.e. outside of
    /// the build phase of a spec.
    #[error("'{attempted}' has no active example group: declarations must be made while a spec is being built, not while its examples run")]
    NoActiveGroup { attempted: ContextDescriptor },

    /// A suite hook declared after its spec's hooks were handed to the suite,
    /// where it would never run.
    #[error("'{0}' must be declared while a spec is being built, not while its examples run or after the build")]
    LateSuiteHook(&'static str),
}

impl DslError {
    /// The diagnostic name, `Invalid DSL Exception` for nesting violations.
    pub fn name(&self) -> &'static str {
        match self {
            DslError::InvalidDsl { .. } => INVALID_DSL,
            DslError::UnknownSharedExample(_) => "Unknown Shared Example",
            DslError::DuplicateSharedExample(_) | DslError::SharedExamplesSealed(_) => {
                "Shared Example Registration"
            }
            DslError::NoActiveGroup { .. } | DslError::LateSuiteHook(_) => {
                "Internal Inconsistency"
            }
        }
    }

    pub fn is_invalid_dsl(&self) -> bool {
        matches!(self, DslError::InvalidDsl { .. })
    }
}

/// A failure of the reference executor, as opposed to a failing example.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("focused examples detected but QUICKSPEC_FAIL_ON_FOCUS is set; remove fit/fdescribe/fcontext before pushing")]
    FocusedExamples,
}
