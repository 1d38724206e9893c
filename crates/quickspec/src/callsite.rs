//! Source locations attached to examples.

use std::fmt;
use std::panic::Location;

/// Where an example (or an `it_behaves_like` expansion) was declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Callsite {
    pub file: String,
    pub line: u32,
}

impl Callsite {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Callsite {
            file: file.into(),
            line,
        }
    }

    /// The location of the caller of the enclosing `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&Location<'_>> for Callsite {
    fn from(location: &Location<'_>) -> Self {
        Callsite::new(location.file(), location.line())
    }
}

impl fmt::Display for Callsite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
