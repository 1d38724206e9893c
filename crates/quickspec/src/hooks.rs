//! Before/after hooks at group and suite scope.

use crate::example::ExampleMetadata;
use crate::world::World;
use std::fmt;
use std::rc::Rc;

/// A group-scoped hook. The variant is fixed at registration so the executor
/// can invoke every hook uniformly.
#[derive(Clone)]
pub enum Hook {
    Plain(Rc<dyn Fn(&mut World)>),
    WithMetadata(Rc<dyn Fn(&mut World, &ExampleMetadata)>),
}

impl Hook {
    pub fn plain(f: impl Fn(&mut World) + 'static) -> Self {
        Hook::Plain(Rc::new(f))
    }

    pub fn with_metadata(f: impl Fn(&mut World, &ExampleMetadata) + 'static) -> Self {
        Hook::WithMetadata(Rc::new(f))
    }

    pub fn call(&self, world: &mut World, metadata: &ExampleMetadata) {
        match self {
            Hook::Plain(f) => f(world),
            Hook::WithMetadata(f) => f(world, metadata),
        }
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hook::Plain(_) => f.write_str("Hook::Plain"),
            Hook::WithMetadata(_) => f.write_str("Hook::WithMetadata"),
        }
    }
}

/// Ordered `before`/`after` hooks owned by one example group.
#[derive(Debug, Clone, Default)]
pub struct Hooks {
    pub before: Vec<Hook>,
    pub after: Vec<Hook>,
}

impl Hooks {
    pub fn append_before(&mut self, hook: Hook) {
        self.before.push(hook);
    }

    pub fn append_after(&mut self, hook: Hook) {
        self.after.push(hook);
    }

    pub fn is_empty(&self) -> bool {
        self.before.is_empty() && self.after.is_empty()
    }
}

/// Hooks run once around a whole suite run.
#[derive(Clone, Default)]
pub struct SuiteHooks {
    pub before: Vec<Rc<dyn Fn()>>,
    pub after: Vec<Rc<dyn Fn()>>,
}

impl SuiteHooks {
    pub fn append_before(&mut self, f: impl Fn() + 'static) {
        self.before.push(Rc::new(f));
    }

    pub fn append_after(&mut self, f: impl Fn() + 'static) {
        self.after.push(Rc::new(f));
    }

    /// Move every hook of `other` to the end of these hooks.
    pub fn extend(&mut self, other: SuiteHooks) {
        self.before.extend(other.before);
        self.after.extend(other.after);
    }

    pub fn run_before(&self) {
        for hook in &self.before {
            hook();
        }
    }

    pub fn run_after(&self) {
        for hook in &self.after {
            hook();
        }
    }
}

impl fmt::Debug for SuiteHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuiteHooks")
            .field("before", &self.before.len())
            .field("after", &self.after.len())
            .finish()
    }
}
