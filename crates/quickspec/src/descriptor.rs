//! Which declarative construct the builder is lexically inside.

use std::fmt;

/// Tags the construct currently being built (or executed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextDescriptor {
    None,
    /// The top level of a spec body.
    Top,
    Describe,
    Context,
    It,
    ItBehavesLike,
    BeforeEach,
    AfterEach,
}

impl ContextDescriptor {
    /// The DSL keyword used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ContextDescriptor::None => "none",
            ContextDescriptor::Top => "spec",
            ContextDescriptor::Describe => "describe",
            ContextDescriptor::Context => "context",
            ContextDescriptor::It => "it",
            ContextDescriptor::ItBehavesLike => "itBehavesLike",
            ContextDescriptor::BeforeEach => "beforeEach",
            ContextDescriptor::AfterEach => "afterEach",
        }
    }
}

impl fmt::Display for ContextDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
