//! The builder: owns one spec's tree and the construction cursor, and exposes
//! the declarative operations.

use crate::callsite::Callsite;
use crate::descriptor::ContextDescriptor;
use crate::error::DslError;
use crate::example::{Example, ExampleId, ExampleMetadata};
use crate::flags::{FilterFlags, FOCUSED, PENDING};
use crate::group::{ExampleGroup, GroupId};
use crate::hooks::{Hook, SuiteHooks};
use crate::registry::{SharedExampleContext, SharedExampleRegistry};
use crate::validation::validate;
use std::fmt;
use std::rc::Rc;

/// Result of every declarative operation.
pub type DslResult = Result<(), DslError>;

/// Where the builder currently is.
///
/// `group` is `None` while examples execute: the tree is read-only then, so
/// anything that would attach a node fails with [`DslError::NoActiveGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub group: Option<GroupId>,
    pub context: ContextDescriptor,
}

/// A structured diagnostic raised during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A `pending` declaration; its body was never run.
    Pending { description: String },
}

/// Builds the example tree of one spec.
///
/// Every nested closure receives the same `&mut World`. Each operation first
/// checks the nesting rules against the cursor, then mutates the tree, and
/// restores the cursor when its closure returns (with `Ok` or `Err`).
///
/// # Example
///
/// ```rust
/// use quickspec::World;
///
/// let mut world = World::new("Calculator");
/// world
///     .describe("addition", |w| {
///         w.it("adds two numbers", |_| assert_eq!(2 + 3, 5))?;
///         w.context("with negatives", |w| {
///             w.it("handles negatives", |_| assert_eq!(-1 + 1, 0))
///         })
///     })
///     .unwrap();
///
/// assert_eq!(world.example_count(), 2);
/// ```
pub struct World {
    name: String,
    groups: Vec<ExampleGroup>,
    examples: Vec<Example>,
    cursor: Cursor,
    shared_examples: Rc<SharedExampleRegistry>,
    suite_hooks: SuiteHooks,
    sealed: bool,
    notices: Vec<Notice>,
}

const ROOT: GroupId = GroupId(0);

impl World {
    /// A world with no shared examples available.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_shared_examples(name, Rc::new(SharedExampleRegistry::new()))
    }

    pub fn with_shared_examples(
        name: impl Into<String>,
        shared_examples: Rc<SharedExampleRegistry>,
    ) -> Self {
        let name = name.into();
        World {
            groups: vec![ExampleGroup::new(name.clone(), FilterFlags::new(), None)],
            name,
            examples: Vec::new(),
            cursor: Cursor {
                group: Some(ROOT),
                context: ContextDescriptor::Top,
            },
            shared_examples,
            suite_hooks: SuiteHooks::default(),
            sealed: false,
            notices: Vec::new(),
        }
    }

    // ============================================================================
    // Describe / Context
    // ============================================================================

    pub fn describe(
        &mut self,
        description: &str,
        body: impl FnOnce(&mut World) -> DslResult,
    ) -> DslResult {
        self.describe_with(description, FilterFlags::new(), body)
    }

    pub fn describe_with(
        &mut self,
        description: &str,
        flags: FilterFlags,
        body: impl FnOnce(&mut World) -> DslResult,
    ) -> DslResult {
        self.group_impl(ContextDescriptor::Describe, description, flags, body)
    }

    pub fn fdescribe(
        &mut self,
        description: &str,
        body: impl FnOnce(&mut World) -> DslResult,
    ) -> DslResult {
        self.fdescribe_with(description, FilterFlags::new(), body)
    }

    /// `describe_with` with `flags` augmented by `focused=true`.
    pub fn fdescribe_with(
        &mut self,
        description: &str,
        mut flags: FilterFlags,
        body: impl FnOnce(&mut World) -> DslResult,
    ) -> DslResult {
        flags.set(FOCUSED, true);
        self.describe_with(description, flags, body)
    }

    pub fn xdescribe(
        &mut self,
        description: &str,
        body: impl FnOnce(&mut World) -> DslResult,
    ) -> DslResult {
        self.xdescribe_with(description, FilterFlags::new(), body)
    }

    /// `describe_with` with `flags` augmented by `pending=true`.
    pub fn xdescribe_with(
        &mut self,
        description: &str,
        mut flags: FilterFlags,
        body: impl FnOnce(&mut World) -> DslResult,
    ) -> DslResult {
        flags.set(PENDING, true);
        self.describe_with(description, flags, body)
    }

    pub fn context(
        &mut self,
        description: &str,
        body: impl FnOnce(&mut World) -> DslResult,
    ) -> DslResult {
        self.context_with(description, FilterFlags::new(), body)
    }

    pub fn context_with(
        &mut self,
        description: &str,
        flags: FilterFlags,
        body: impl FnOnce(&mut World) -> DslResult,
    ) -> DslResult {
        self.group_impl(ContextDescriptor::Context, description, flags, body)
    }

    pub fn fcontext(
        &mut self,
        description: &str,
        body: impl FnOnce(&mut World) -> DslResult,
    ) -> DslResult {
        self.fcontext_with(description, FilterFlags::new(), body)
    }

    /// `context_with` with `flags` augmented by `focused=true`.
    pub fn fcontext_with(
        &mut self,
        description: &str,
        mut flags: FilterFlags,
        body: impl FnOnce(&mut World) -> DslResult,
    ) -> DslResult {
        flags.set(FOCUSED, true);
        self.context_with(description, flags, body)
    }

    pub fn xcontext(
        &mut self,
        description: &str,
        body: impl FnOnce(&mut World) -> DslResult,
    ) -> DslResult {
        self.xcontext_with(description, FilterFlags::new(), body)
    }

    /// `context_with` with `flags` augmented by `pending=true`.
    pub fn xcontext_with(
        &mut self,
        description: &str,
        mut flags: FilterFlags,
        body: impl FnOnce(&mut World) -> DslResult,
    ) -> DslResult {
        flags.set(PENDING, true);
        self.context_with(description, flags, body)
    }

    fn group_impl(
        &mut self,
        attempted: ContextDescriptor,
        description: &str,
        flags: FilterFlags,
        body: impl FnOnce(&mut World) -> DslResult,
    ) -> DslResult {
        validate(attempted, self.cursor.context)?;
        let parent = self.active_group(attempted)?;
        let group = self.push_group(parent, description.to_string(), flags);
        log::debug!("{}: {attempted} '{description}'", self.name);
        self.enter(group, attempted, body)
    }

    // ============================================================================
    // It
    // ============================================================================

    /// Declare an example. The callsite is the location of this call.
    ///
    /// The body is stored, not run; the executor calls it later with the world
    /// in the `it` context.
    #[track_caller]
    pub fn it(&mut self, description: &str, body: impl Fn(&mut World) + 'static) -> DslResult {
        self.it_with(description, FilterFlags::new(), Callsite::caller(), body)
    }

    #[track_caller]
    pub fn fit(&mut self, description: &str, body: impl Fn(&mut World) + 'static) -> DslResult {
        self.fit_with(description, FilterFlags::new(), Callsite::caller(), body)
    }

    #[track_caller]
    pub fn xit(&mut self, description: &str, body: impl Fn(&mut World) + 'static) -> DslResult {
        self.xit_with(description, FilterFlags::new(), Callsite::caller(), body)
    }

    pub fn fit_with(
        &mut self,
        description: &str,
        mut flags: FilterFlags,
        callsite: Callsite,
        body: impl Fn(&mut World) + 'static,
    ) -> DslResult {
        flags.set(FOCUSED, true);
        self.it_with(description, flags, callsite, body)
    }

    pub fn xit_with(
        &mut self,
        description: &str,
        mut flags: FilterFlags,
        callsite: Callsite,
        body: impl Fn(&mut World) + 'static,
    ) -> DslResult {
        flags.set(PENDING, true);
        self.it_with(description, flags, callsite, body)
    }

    pub fn it_with(
        &mut self,
        description: &str,
        flags: FilterFlags,
        callsite: Callsite,
        body: impl Fn(&mut World) + 'static,
    ) -> DslResult {
        validate(ContextDescriptor::It, self.cursor.context)?;
        let group = self.active_group(ContextDescriptor::It)?;

        let id = ExampleId(self.examples.len());
        self.examples.push(Example {
            description: description.to_string(),
            callsite,
            flags,
            body: Rc::new(body),
            is_shared_example: false,
            group,
        });
        self.groups[group.0].examples.push(id);
        log::debug!("{}: it '{description}'", self.name);
        Ok(())
    }

    // ============================================================================
    // Hooks
    // ============================================================================

    pub fn before_each(&mut self, hook: impl Fn(&mut World) + 'static) -> DslResult {
        self.add_hook(ContextDescriptor::BeforeEach, Hook::plain(hook))
    }

    pub fn before_each_with_metadata(
        &mut self,
        hook: impl Fn(&mut World, &ExampleMetadata) + 'static,
    ) -> DslResult {
        self.add_hook(ContextDescriptor::BeforeEach, Hook::with_metadata(hook))
    }

    pub fn after_each(&mut self, hook: impl Fn(&mut World) + 'static) -> DslResult {
        self.add_hook(ContextDescriptor::AfterEach, Hook::plain(hook))
    }

    pub fn after_each_with_metadata(
        &mut self,
        hook: impl Fn(&mut World, &ExampleMetadata) + 'static,
    ) -> DslResult {
        self.add_hook(ContextDescriptor::AfterEach, Hook::with_metadata(hook))
    }

    fn add_hook(&mut self, attempted: ContextDescriptor, hook: Hook) -> DslResult {
        validate(attempted, self.cursor.context)?;
        let group = self.active_group(attempted)?;
        let hooks = &mut self.groups[group.0].hooks;
        if attempted == ContextDescriptor::BeforeEach {
            hooks.append_before(hook);
        } else {
            hooks.append_after(hook);
        }
        Ok(())
    }

    /// Suite hooks are not subject to nesting rules. They are collected here
    /// and handed to the suite once the spec has been built.
    ///
    /// Declaring one while examples run, or after the suite has taken this
    /// spec's hooks, fails with [`DslError::LateSuiteHook`].
    pub fn before_suite(&mut self, hook: impl Fn() + 'static) -> DslResult {
        self.check_suite_hook("beforeSuite")?;
        self.suite_hooks.append_before(hook);
        Ok(())
    }

    pub fn after_suite(&mut self, hook: impl Fn() + 'static) -> DslResult {
        self.check_suite_hook("afterSuite")?;
        self.suite_hooks.append_after(hook);
        Ok(())
    }

    fn check_suite_hook(&self, attempted: &'static str) -> DslResult {
        if self.sealed || self.cursor.group.is_none() {
            return Err(DslError::LateSuiteHook(attempted));
        }
        Ok(())
    }

    // ============================================================================
    // Shared examples
    // ============================================================================

    #[track_caller]
    pub fn it_behaves_like(&mut self, name: &str) -> DslResult {
        self.it_behaves_like_with(
            name,
            SharedExampleContext::new,
            FilterFlags::new(),
            Callsite::caller(),
        )
    }

    #[track_caller]
    pub fn it_behaves_like_with_context(
        &mut self,
        name: &str,
        context: impl FnOnce() -> SharedExampleContext,
    ) -> DslResult {
        self.it_behaves_like_with(name, context, FilterFlags::new(), Callsite::caller())
    }

    /// Expand the shared example `name` into a new group named after it.
    ///
    /// Every example the shared example creates, at any depth, is marked as a
    /// shared example and gets `callsite` in place of its own.
    pub fn it_behaves_like_with(
        &mut self,
        name: &str,
        context: impl FnOnce() -> SharedExampleContext,
        flags: FilterFlags,
        callsite: Callsite,
    ) -> DslResult {
        let attempted = ContextDescriptor::ItBehavesLike;
        validate(attempted, self.cursor.context)?;
        let parent = self.active_group(attempted)?;
        let closure = self.shared_examples.resolve(name)?;

        let group = self.push_group(parent, name.to_string(), flags);
        log::debug!("{}: itBehavesLike '{name}' at {callsite}", self.name);

        let context = context();
        let result = self.enter(group, attempted, |world| closure(world, &context));

        for id in self.examples_under(group) {
            let example = &mut self.examples[id.0];
            example.is_shared_example = true;
            example.callsite = callsite.clone();
        }
        result
    }

    // ============================================================================
    // Pending
    // ============================================================================

    /// Record a pending notice. `body` is dropped without being run, so
    /// nothing inside it is declared or validated.
    pub fn pending(&mut self, description: &str, body: impl FnOnce(&mut World) -> DslResult) {
        drop(body);
        log::info!("Pending: {description}");
        self.notices.push(Notice::Pending {
            description: description.to_string(),
        });
    }

    // ============================================================================
    // Cursor
    // ============================================================================

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn current_group(&self) -> Option<GroupId> {
        self.cursor.group
    }

    pub fn current_context(&self) -> ContextDescriptor {
        self.cursor.context
    }

    /// Run `f` with the cursor detached from the tree and set to `context`,
    /// as the executor does for hooks (`beforeEach`/`afterEach`) and example
    /// bodies (`it`). The cursor is restored afterwards.
    pub fn executing<R>(&mut self, context: ContextDescriptor, f: impl FnOnce(&mut World) -> R) -> R {
        let saved = self.cursor;
        self.cursor = Cursor {
            group: None,
            context,
        };
        let result = f(self);
        self.cursor = saved;
        result
    }

    fn enter(
        &mut self,
        group: GroupId,
        context: ContextDescriptor,
        body: impl FnOnce(&mut World) -> DslResult,
    ) -> DslResult {
        let saved = self.cursor;
        self.cursor = Cursor {
            group: Some(group),
            context,
        };
        let result = body(self);
        self.cursor = saved;
        result
    }

    fn active_group(&self, attempted: ContextDescriptor) -> Result<GroupId, DslError> {
        self.cursor
            .group
            .ok_or(DslError::NoActiveGroup { attempted })
    }

    fn push_group(&mut self, parent: GroupId, description: String, flags: FilterFlags) -> GroupId {
        let id = GroupId(self.groups.len());
        self.groups
            .push(ExampleGroup::new(description, flags, Some(parent)));
        self.groups[parent.0].groups.push(id);
        id
    }

    // ============================================================================
    // Read access for the executor
    // ============================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> GroupId {
        ROOT
    }

    pub fn group(&self, id: GroupId) -> &ExampleGroup {
        &self.groups[id.0]
    }

    pub fn example(&self, id: ExampleId) -> &Example {
        &self.examples[id.0]
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn example_count(&self) -> usize {
        self.examples.len()
    }

    /// All examples in depth-first declaration order.
    ///
    /// Construction is itself depth-first, so arena order is declaration
    /// order.
    pub fn examples(&self) -> impl Iterator<Item = (ExampleId, &Example)> {
        self.examples
            .iter()
            .enumerate()
            .map(|(i, example)| (ExampleId(i), example))
    }

    /// Every example declared in `group` or any of its descendants.
    pub fn examples_under(&self, group: GroupId) -> Vec<ExampleId> {
        let mut ids = Vec::new();
        let mut stack = vec![group];
        while let Some(id) = stack.pop() {
            let group = &self.groups[id.0];
            ids.extend_from_slice(&group.examples);
            stack.extend(group.groups.iter().rev());
        }
        ids.sort();
        ids
    }

    /// Groups enclosing `example`, from the root down to its own group.
    pub fn ancestors(&self, example: ExampleId) -> Vec<GroupId> {
        let mut chain = Vec::new();
        let mut next = Some(self.examples[example.0].group);
        while let Some(id) = next {
            chain.push(id);
            next = self.groups[id.0].parent;
        }
        chain.reverse();
        chain
    }

    /// The example's flags layered over every ancestor's, innermost winning.
    pub fn effective_flags(&self, example: ExampleId) -> FilterFlags {
        let inherited = self
            .ancestors(example)
            .into_iter()
            .fold(FilterFlags::new(), |acc, id| {
                self.groups[id.0].flags.layered_over(&acc)
            });
        self.examples[example.0].flags.layered_over(&inherited)
    }

    /// Group descriptions below the root, then the example's, space-joined.
    pub fn full_description(&self, example: ExampleId) -> String {
        let mut parts: Vec<&str> = self
            .ancestors(example)
            .into_iter()
            .filter(|id| !self.groups[id.0].is_root())
            .map(|id| self.groups[id.0].description.as_str())
            .collect();
        parts.push(&self.examples[example.0].description);
        parts.join(" ")
    }

    pub fn metadata(&self, example: ExampleId) -> ExampleMetadata {
        let ex = &self.examples[example.0];
        ExampleMetadata {
            example,
            description: ex.description.clone(),
            full_description: self.full_description(example),
            callsite: ex.callsite.clone(),
            flags: self.effective_flags(example),
            example_index: example.0,
        }
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn suite_hooks(&self) -> &SuiteHooks {
        &self.suite_hooks
    }

    /// Hand the collected suite hooks over. No further ones are accepted.
    pub(crate) fn take_suite_hooks(&mut self) -> SuiteHooks {
        self.sealed = true;
        std::mem::take(&mut self.suite_hooks)
    }
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("name", &self.name)
            .field("groups", &self.groups.len())
            .field("examples", &self.examples.len())
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ContextDescriptor::*;

    fn root_cursor() -> Cursor {
        Cursor {
            group: Some(ROOT),
            context: Top,
        }
    }

    #[test]
    fn test_describe_nests_and_restores_cursor() {
        let mut world = World::new("spec");
        world
            .describe("outer", |w| {
                let outer = w.current_group();
                assert_eq!(w.current_context(), Describe);
                w.context("inner", |w| {
                    assert_eq!(w.current_context(), Context);
                    assert_ne!(w.current_group(), outer);
                    w.it("leaf", |_| {})
                })?;
                assert_eq!(w.current_group(), outer);
                assert_eq!(w.current_context(), Describe);
                Ok(())
            })
            .unwrap();

        assert_eq!(world.cursor(), root_cursor());
        assert_eq!(world.group_count(), 3);
        let outer = world.group(world.root()).groups()[0];
        let inner = world.group(outer).groups()[0];
        assert_eq!(world.group(inner).description(), "inner");
        assert_eq!(world.group(inner).parent(), Some(outer));
        assert_eq!(world.group(inner).examples().len(), 1);
    }

    #[test]
    fn test_cursor_restored_after_body_error() {
        let mut world = World::new("spec");
        let err = world
            .describe("outer", |w| {
                w.describe("inner", |_| Err(DslError::UnknownSharedExample("x".into())))
            })
            .unwrap_err();

        assert_eq!(err, DslError::UnknownSharedExample("x".into()));
        assert_eq!(world.cursor(), root_cursor());
    }

    #[test]
    fn test_focus_and_pending_variants_set_flags() {
        let mut world = World::new("spec");
        world.fdescribe("focused group", |_| Ok(())).unwrap();
        world.xcontext("pending group", |_| Ok(())).unwrap();
        world.fit("focused example", |_| {}).unwrap();
        world.xit("pending example", |_| {}).unwrap();

        let groups = world.group(world.root()).groups().to_vec();
        assert!(world.group(groups[0]).flags().is_focused());
        assert!(world.group(groups[1]).flags().is_pending());
        assert!(world.example(ExampleId(0)).flags().is_focused());
        assert!(world.example(ExampleId(1)).flags().is_pending());
    }

    #[test]
    fn test_it_records_its_callsite() {
        let mut world = World::new("spec");
        let line = line!() + 1;
        world.it("here", |_| {}).unwrap();

        let callsite = world.example(ExampleId(0)).callsite();
        assert_eq!(callsite.line, line);
        assert!(callsite.file.ends_with("world.rs"));
    }

    #[test]
    fn test_hooks_attach_to_current_group() {
        let mut world = World::new("spec");
        world.before_each(|_| {}).unwrap();
        world
            .describe("group", |w| {
                w.before_each_with_metadata(|_, _| {})?;
                w.after_each(|_| {})?;
                w.after_each_with_metadata(|_, _| {})
            })
            .unwrap();

        let root = world.group(world.root());
        assert_eq!(root.hooks().before.len(), 1);
        let group = world.group(root.groups()[0]);
        assert_eq!(group.hooks().before.len(), 1);
        assert_eq!(group.hooks().after.len(), 2);
        assert!(matches!(group.hooks().after[1], Hook::WithMetadata(_)));
    }

    #[test]
    fn test_operations_while_executing_an_example() {
        let mut world = World::new("spec");
        world.describe("group", |w| w.it("a", |_| {})).unwrap();
        let groups_before = world.group_count();

        world.executing(It, |w| {
            for err in [
                w.it("nested", |_| {}).unwrap_err(),
                w.describe("nested", |_| Ok(())).unwrap_err(),
                w.context("nested", |_| Ok(())).unwrap_err(),
                w.before_each(|_| {}).unwrap_err(),
                w.after_each(|_| {}).unwrap_err(),
                w.it_behaves_like("anything").unwrap_err(),
            ] {
                assert!(err.is_invalid_dsl(), "{err}");
            }
        });

        assert_eq!(world.group_count(), groups_before);
        assert_eq!(world.example_count(), 1);
        assert_eq!(world.cursor(), root_cursor());
    }

    #[test]
    fn test_describe_inside_hook_has_no_group_to_attach_to() {
        let mut world = World::new("spec");
        let err = world
            .executing(BeforeEach, |w| w.describe("late", |_| Ok(())))
            .unwrap_err();

        assert_eq!(err, DslError::NoActiveGroup { attempted: Describe });
        assert_eq!(world.group_count(), 1);
    }

    #[test]
    fn test_pending_never_runs_its_body() {
        let mut world = World::new("spec");
        world.pending("later", |w| {
            w.it("never declared", |_| {})?;
            panic!("pending body must not run");
        });

        assert_eq!(world.example_count(), 0);
        assert_eq!(
            world.notices(),
            &[Notice::Pending {
                description: "later".into()
            }]
        );
    }

    #[test]
    fn test_ancestors_and_full_description() {
        let mut world = World::new("spec");
        world
            .describe("Calculator", |w| {
                w.context("with negatives", |w| w.it("handles them", |_| {}))
            })
            .unwrap();

        let id = ExampleId(0);
        assert_eq!(world.ancestors(id).len(), 3);
        assert_eq!(world.ancestors(id)[0], world.root());
        assert_eq!(
            world.full_description(id),
            "Calculator with negatives handles them"
        );
    }

    #[test]
    fn test_effective_flags_inherit_from_groups() {
        let mut world = World::new("spec");
        world
            .xdescribe("pending group", |w| {
                w.it("inherits", |_| {})?;
                w.it_with(
                    "overrides",
                    FilterFlags::new().with(crate::flags::PENDING, false),
                    Callsite::new("spec.rs", 1),
                    |_| {},
                )
            })
            .unwrap();

        assert!(world.effective_flags(ExampleId(0)).is_pending());
        assert!(!world.effective_flags(ExampleId(1)).is_pending());
        assert!(!world.example(ExampleId(0)).flags().is_pending());
    }

    #[test]
    fn test_suite_hooks_are_collected() {
        let mut world = World::new("spec");
        world.before_suite(|| {}).unwrap();
        world.after_suite(|| {}).unwrap();
        assert_eq!(world.suite_hooks().before.len(), 1);

        let hooks = world.take_suite_hooks();
        assert_eq!(hooks.after.len(), 1);
        assert!(world.suite_hooks().before.is_empty());

        let err = world.after_suite(|| {}).unwrap_err();
        assert_eq!(err, DslError::LateSuiteHook("afterSuite"));
        assert!(world.suite_hooks().after.is_empty());
    }

    #[test]
    fn test_suite_hooks_rejected_while_executing() {
        let mut world = World::new("spec");
        let err = world
            .executing(It, |w| w.before_suite(|| {}))
            .unwrap_err();
        assert_eq!(err, DslError::LateSuiteHook("beforeSuite"));
        assert!(world.suite_hooks().before.is_empty());
        assert_eq!(world.cursor(), root_cursor());
    }

    #[test]
    fn test_focus_and_pending_variants_keep_caller_flags() {
        let mut world = World::new("spec");
        world
            .fdescribe_with("focused group", FilterFlags::new().with("slow", true), |w| {
                w.xit_with(
                    "pending example",
                    FilterFlags::new().with("flaky", true),
                    Callsite::new("world_spec.rs", 7),
                    |_| {},
                )
            })
            .unwrap();
        world
            .xcontext_with("pending group", FilterFlags::focused(), |w| {
                w.fit_with("focused example", FilterFlags::pending(), Callsite::caller(), |_| {})
            })
            .unwrap();

        let group = world.group(GroupId(1));
        assert!(group.flags().is_focused());
        assert_eq!(group.flags().get("slow"), Some(true));

        let example = world.example(ExampleId(0));
        assert!(example.flags().is_pending());
        assert_eq!(example.flags().get("flaky"), Some(true));
        assert_eq!(example.callsite(), &Callsite::new("world_spec.rs", 7));

        let both = world.group(GroupId(2)).flags();
        assert!(both.is_focused() && both.is_pending());
        let both = world.example(ExampleId(1)).flags();
        assert!(both.is_focused() && both.is_pending());
    }
}
