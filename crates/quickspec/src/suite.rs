//! A run's worth of specs plus the state they share: shared examples and
//! suite hooks.

use crate::error::DslError;
use crate::hooks::SuiteHooks;
use crate::registry::{SharedExampleContext, SharedExampleRegistry};
use crate::world::{DslResult, World};
use std::rc::Rc;

/// Owns the shared-example registry, the suite hooks and every built spec.
///
/// Shared examples are registered during setup. Once a spec has been built
/// the registry is shared with that spec and becomes read-only.
#[derive(Debug, Default)]
pub struct Suite {
    shared_examples: Rc<SharedExampleRegistry>,
    hooks: SuiteHooks,
    specs: Vec<World>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named shared example. Names are unique.
    pub fn shared_examples(
        &mut self,
        name: &str,
        closure: impl Fn(&mut World, &SharedExampleContext) -> DslResult + 'static,
    ) -> DslResult {
        Rc::get_mut(&mut self.shared_examples)
            .ok_or_else(|| DslError::SharedExamplesSealed(name.to_string()))?
            .register(name, closure)
    }

    pub fn before_suite(&mut self, hook: impl Fn() + 'static) {
        self.hooks.append_before(hook);
    }

    pub fn after_suite(&mut self, hook: impl Fn() + 'static) {
        self.hooks.append_after(hook);
    }

    /// Build a spec through its own [`World`].
    ///
    /// On error the partially built spec is discarded; the registry, the
    /// suite hooks and previously built specs are left as they were.
    pub fn spec(&mut self, name: &str, body: impl FnOnce(&mut World) -> DslResult) -> DslResult {
        let mut world = World::with_shared_examples(name, Rc::clone(&self.shared_examples));
        if let Err(err) = body(&mut world) {
            log::warn!("spec '{name}' failed to build: {}: {err}", err.name());
            return Err(err);
        }

        self.hooks.extend(world.take_suite_hooks());
        log::debug!(
            "built spec '{name}': {} groups, {} examples",
            world.group_count(),
            world.example_count()
        );
        self.specs.push(world);
        Ok(())
    }

    pub fn specs(&self) -> &[World] {
        &self.specs
    }

    pub fn specs_mut(&mut self) -> &mut [World] {
        &mut self.specs
    }

    pub fn hooks(&self) -> &SuiteHooks {
        &self.hooks
    }

    pub fn registry(&self) -> &SharedExampleRegistry {
        &self.shared_examples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_sealed_once_a_spec_exists() {
        let mut suite = Suite::new();
        suite.shared_examples("before", |_, _| Ok(())).unwrap();
        suite.spec("spec", |w| w.it_behaves_like("before")).unwrap();

        let err = suite.shared_examples("after", |_, _| Ok(())).unwrap_err();
        assert_eq!(err, DslError::SharedExamplesSealed("after".into()));
        assert!(!suite.registry().contains("after"));
    }

    #[test]
    fn test_failed_spec_leaves_suite_untouched() {
        let mut suite = Suite::new();
        suite.spec("good", |w| w.it("works", |_| {})).unwrap();

        let err = suite
            .spec("bad", |w| {
                w.before_suite(|| {})?;
                w.it("declared before the failure", |_| {})?;
                w.it_behaves_like("missing")
            })
            .unwrap_err();

        assert_eq!(err, DslError::UnknownSharedExample("missing".into()));
        assert_eq!(suite.specs().len(), 1);
        assert!(suite.hooks().before.is_empty());
    }

    #[test]
    fn test_spec_suite_hooks_merge_into_suite() {
        let mut suite = Suite::new();
        suite.before_suite(|| {});
        suite
            .spec("spec", |w| {
                w.before_suite(|| {})?;
                w.after_suite(|| {})?;
                Ok(())
            })
            .unwrap();

        assert_eq!(suite.hooks().before.len(), 2);
        assert_eq!(suite.hooks().after.len(), 1);
    }
}
