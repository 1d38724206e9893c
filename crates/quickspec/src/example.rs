//! Examples: the leaves of the spec tree.

use crate::callsite::Callsite;
use crate::flags::FilterFlags;
use crate::group::GroupId;
use crate::world::World;
use std::fmt;
use std::rc::Rc;

/// Index of an [`Example`] in its world's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExampleId(pub(crate) usize);

impl ExampleId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single runnable test case.
pub struct Example {
    pub(crate) description: String,
    pub(crate) callsite: Callsite,
    pub(crate) flags: FilterFlags,
    pub(crate) body: Rc<dyn Fn(&mut World)>,
    pub(crate) is_shared_example: bool,
    pub(crate) group: GroupId,
}

impl Example {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn callsite(&self) -> &Callsite {
        &self.callsite
    }

    /// The flags declared on this example, without ancestor flags.
    pub fn flags(&self) -> &FilterFlags {
        &self.flags
    }

    /// True if the example was produced by an `it_behaves_like` expansion.
    pub fn is_shared_example(&self) -> bool {
        self.is_shared_example
    }

    /// The group the example was declared in.
    pub fn group(&self) -> GroupId {
        self.group
    }

    /// A handle on the body, for the executor to invoke with the world.
    pub fn body(&self) -> Rc<dyn Fn(&mut World)> {
        Rc::clone(&self.body)
    }
}

impl fmt::Debug for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Example")
            .field("description", &self.description)
            .field("callsite", &self.callsite)
            .field("flags", &self.flags)
            .field("is_shared_example", &self.is_shared_example)
            .field("group", &self.group)
            .finish_non_exhaustive()
    }
}

/// What a metadata-aware hook learns about the example it wraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleMetadata {
    pub example: ExampleId,
    pub description: String,
    /// Group descriptions from the root down, then the example's own.
    pub full_description: String,
    pub callsite: Callsite,
    pub flags: FilterFlags,
    /// Position of the example in depth-first declaration order. Within its
    /// spec when built by `World::metadata`; across the whole run when handed
    /// to hooks by the runner.
    pub example_index: usize,
}
