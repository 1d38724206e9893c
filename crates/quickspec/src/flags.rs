//! Filter flags: boolean markers such as `focused` and `pending`.

use std::collections::BTreeMap;

/// Marks a group or example as focused (only focused examples run).
pub const FOCUSED: &str = "focused";
/// Marks a group or example as pending (reported, never run).
pub const PENDING: &str = "pending";

/// A mapping of marker name to boolean, attached to groups and examples.
///
/// The builder only stores flags. Inheritance is resolved by the executor via
/// [`FilterFlags::layered_over`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterFlags {
    flags: BTreeMap<String, bool>,
}

impl FilterFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused() -> Self {
        Self::new().with(FOCUSED, true)
    }

    pub fn pending() -> Self {
        Self::new().with(PENDING, true)
    }

    /// Return these flags with `name` set to `value`.
    pub fn with(mut self, name: impl Into<String>, value: bool) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: bool) {
        self.flags.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.flags.get(name).copied()
    }

    pub fn is_focused(&self) -> bool {
        self.get(FOCUSED).unwrap_or(false)
    }

    pub fn is_pending(&self) -> bool {
        self.get(PENDING).unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// These flags layered over `parent`: every key set here overrides the
    /// parent's value, keys only present on the parent carry through.
    pub fn layered_over(&self, parent: &FilterFlags) -> FilterFlags {
        let mut flags = parent.flags.clone();
        flags.extend(self.flags.iter().map(|(k, v)| (k.clone(), *v)));
        FilterFlags { flags }
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for FilterFlags {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        FilterFlags {
            flags: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
