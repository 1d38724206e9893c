//! Example groups: the internal nodes of the spec tree.

use crate::example::ExampleId;
use crate::flags::FilterFlags;
use crate::hooks::Hooks;

/// Index of an [`ExampleGroup`] in its world's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub(crate) usize);

impl GroupId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named collection of examples and nested groups.
///
/// Children are owned by the arena and referenced by id; `parent` is only a
/// back-reference used for cursor restoration and ancestor walks.
#[derive(Debug, Clone)]
pub struct ExampleGroup {
    pub(crate) description: String,
    pub(crate) flags: FilterFlags,
    pub(crate) groups: Vec<GroupId>,
    pub(crate) examples: Vec<ExampleId>,
    pub(crate) hooks: Hooks,
    pub(crate) parent: Option<GroupId>,
}

impl ExampleGroup {
    pub(crate) fn new(description: String, flags: FilterFlags, parent: Option<GroupId>) -> Self {
        ExampleGroup {
            description,
            flags,
            groups: Vec::new(),
            examples: Vec::new(),
            hooks: Hooks::default(),
            parent,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn flags(&self) -> &FilterFlags {
        &self.flags
    }

    /// Child groups in declaration order.
    pub fn groups(&self) -> &[GroupId] {
        &self.groups
    }

    /// Examples declared directly in this group, in declaration order.
    pub fn examples(&self) -> &[ExampleId] {
        &self.examples
    }

    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    pub fn parent(&self) -> Option<GroupId> {
        self.parent
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
