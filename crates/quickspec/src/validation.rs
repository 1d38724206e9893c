//! Nesting rules for the declarative surface.

use crate::descriptor::ContextDescriptor;
use crate::error::DslError;

/// Decide whether `attempted` may be used while the builder is inside
/// `enclosing`.
///
/// - `it` may not appear inside `it`, `beforeEach` or `afterEach`.
/// - `describe`, `context`, `itBehavesLike`, `beforeEach` and `afterEach` may
///   not appear inside `it`.
///
/// Everything else is allowed.
pub fn validate(
    attempted: ContextDescriptor,
    enclosing: ContextDescriptor,
) -> Result<(), DslError> {
    use ContextDescriptor::*;

    let denied = match attempted {
        It => matches!(enclosing, It | BeforeEach | AfterEach),
        Describe | Context | ItBehavesLike | BeforeEach | AfterEach => enclosing == It,
        None | Top => false,
    };

    if denied {
        Err(DslError::InvalidDsl {
            attempted,
            enclosing,
        })
    } else {
        Ok(())
    }
}
