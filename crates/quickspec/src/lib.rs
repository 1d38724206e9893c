//! # quickspec: the tree-building core of a Quick/RSpec-style BDD DSL
//!
//! Specs are built from nested `describe` / `context` / `it` calls on a
//! [`World`]. Every call is checked against the construct the builder is
//! currently inside, so misuse (an `it` inside an `it`, a `describe` inside a
//! running example, ...) is reported as a [`DslError`] with a stable message
//! instead of silently producing a broken tree.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! fn main() {
//!     quickspec::run(|suite| {
//!         suite.shared_examples("a positive number", |w, ctx| {
//!             let n = *ctx.get::<i32>("n").unwrap();
//!             w.it("is greater than zero", move |_| assert!(n > 0))
//!         })?;
//!
//!         suite.spec("Calculator", |w| {
//!             w.describe("addition", |w| {
//!                 w.it("adds two numbers", |_| assert_eq!(2 + 3, 5))?;
//!                 w.it_behaves_like_with_context("a positive number", || {
//!                     quickspec::SharedExampleContext::new().with("n", 2 + 3)
//!                 })
//!             })
//!         })
//!     });
//! }
//! ```
//!
//! ## Features
//!
//! - `macros` (default): the [`spec!`] keyword DSL
//! - `googletest`: re-exports `googletest` matchers via `quickspec::matchers`

mod callsite;
mod descriptor;
mod error;
mod example;
mod flags;
mod group;
mod hooks;
mod registry;
pub mod runner;
mod suite;
pub mod validation;
mod world;

pub use callsite::Callsite;
pub use descriptor::ContextDescriptor;
pub use error::{DslError, RunError, INVALID_DSL};
pub use example::{Example, ExampleId, ExampleMetadata};
pub use flags::{FilterFlags, FOCUSED, PENDING};
pub use group::{ExampleGroup, GroupId};
pub use hooks::{Hook, Hooks, SuiteHooks};
pub use registry::{SharedExampleClosure, SharedExampleContext, SharedExampleRegistry};
pub use suite::Suite;
pub use world::{Cursor, DslResult, Notice, World};

#[cfg(feature = "macros")]
pub use quickspec_macros::spec;

/// Re-export of the [`googletest`] crate. Available with the `googletest` feature.
#[cfg(feature = "googletest")]
pub use googletest;

/// Composable matchers re-exported from [`googletest::prelude`].
#[cfg(feature = "googletest")]
pub mod matchers {
    pub use googletest::prelude::*;
}

/// Build a suite and run it.
///
/// This is the entry point for test targets with `harness = false`. The
/// process exits with status 1 if the suite fails to build or any example
/// fails.
pub fn run(body: impl FnOnce(&mut Suite) -> DslResult) {
    // Phase 1: build the specs
    let mut suite = Suite::new();
    if let Err(err) = body(&mut suite) {
        eprintln!("quickspec: {}: {err}", err.name());
        std::process::exit(1);
    }

    // Phase 2: execute them
    let config = runner::RunConfig::from_env();
    let report = match runner::run_suite(&mut suite, &config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("quickspec: {err}");
            std::process::exit(1);
        }
    };

    println!(
        "{} ({} passed, {} failed, {} pending, {} skipped)",
        if report.succeeded() { "PASS" } else { "FAIL" },
        report.passed,
        report.failed,
        report.pending,
        report.skipped
    );

    if !report.succeeded() {
        for (i, failure) in report.failures.iter().enumerate() {
            eprintln!("  {}. {}", i + 1, failure);
        }
        std::process::exit(1);
    }
}
