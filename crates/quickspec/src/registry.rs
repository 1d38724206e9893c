//! Named shared examples and the context values passed to them.

use crate::error::DslError;
use crate::world::World;
use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;

/// A group-building closure registered under a name.
pub type SharedExampleClosure = Rc<dyn Fn(&mut World, &SharedExampleContext) -> Result<(), DslError>>;

/// Values handed to a shared example by `it_behaves_like`.
///
/// Values are type-erased; the shared example reads them back with
/// [`SharedExampleContext::get`].
#[derive(Clone, Default)]
pub struct SharedExampleContext {
    values: BTreeMap<String, Rc<dyn Any>>,
}

impl SharedExampleContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<T: 'static>(mut self, key: impl Into<String>, value: T) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert<T: 'static>(&mut self, key: impl Into<String>, value: T) {
        self.values.insert(key.into(), Rc::new(value));
    }

    /// The value under `key`, if present and of type `T`.
    pub fn get<T: 'static>(&self, key: &str) -> Option<&T> {
        self.values.get(key).and_then(|v| v.downcast_ref::<T>())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for SharedExampleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.values.keys()).finish()
    }
}

/// Shared examples by name. Each name may be registered once.
#[derive(Clone, Default)]
pub struct SharedExampleRegistry {
    closures: HashMap<String, SharedExampleClosure>,
}

impl SharedExampleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        closure: impl Fn(&mut World, &SharedExampleContext) -> Result<(), DslError> + 'static,
    ) -> Result<(), DslError> {
        let name = name.into();
        if self.closures.contains_key(&name) {
            return Err(DslError::DuplicateSharedExample(name));
        }
        log::debug!("registered shared example '{name}'");
        self.closures.insert(name, Rc::new(closure));
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Result<SharedExampleClosure, DslError> {
        self.closures
            .get(name)
            .cloned()
            .ok_or_else(|| DslError::UnknownSharedExample(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.closures.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.closures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closures.is_empty()
    }
}

impl fmt::Debug for SharedExampleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.closures.keys().collect();
        names.sort();
        f.debug_struct("SharedExampleRegistry")
            .field("names", &names)
            .finish()
    }
}
