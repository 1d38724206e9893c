//! Sequential reference executor.
//!
//! Walks every built spec depth-first and runs each example with its hooks:
//!
//! ```text
//! before_suite -> before_each (root .. parent) -> body -> after_each (parent .. root) -> after_suite
//! ```
//!
//! Suite hooks run once around the whole run. `after_each` hooks run even if a
//! `before_each` hook or the body panicked.

use crate::descriptor::ContextDescriptor;
use crate::error::RunError;
use crate::example::{ExampleId, ExampleMetadata};
use crate::hooks::Hook;
use crate::suite::Suite;
use crate::world::World;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

/// Environment variable that turns focused examples into a run error.
pub const FAIL_ON_FOCUS_ENV: &str = "QUICKSPEC_FAIL_ON_FOCUS";

/// Configuration for a run.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Refuse to run when any example is focused.
    pub fail_on_focus: bool,
}

impl RunConfig {
    /// Read configuration from `QUICKSPEC_*` environment variables.
    pub fn from_env() -> Self {
        let fail_on_focus = std::env::var(FAIL_ON_FOCUS_ENV)
            .map(|val| val == "1" || val.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        RunConfig { fail_on_focus }
    }
}

/// Results from running a suite.
#[derive(Debug, Default)]
pub struct RunReport {
    pub passed: usize,
    pub failed: usize,
    pub pending: usize,
    pub skipped: usize,
    pub failures: Vec<String>,
}

impl RunReport {
    /// Examples whose body was invoked.
    pub fn executed(&self) -> usize {
        self.passed + self.failed
    }

    /// Examples reached so far, whether or not their body ran.
    pub fn visited(&self) -> usize {
        self.executed() + self.pending + self.skipped
    }

    pub fn succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Run every spec of `suite`.
pub fn run_suite(suite: &mut Suite, config: &RunConfig) -> Result<RunReport, RunError> {
    let focus_mode = suite.specs().iter().any(has_focus);
    if focus_mode && config.fail_on_focus {
        return Err(RunError::FocusedExamples);
    }

    let hooks = suite.hooks().clone();
    let mut report = RunReport::default();
    let start = Instant::now();

    hooks.run_before();
    for world in suite.specs_mut() {
        run_world(world, focus_mode, &mut report);
    }
    hooks.run_after();

    log::info!(
        "{} passed, {} failed, {} pending, {} skipped ({:.3}s)",
        report.passed,
        report.failed,
        report.pending,
        report.skipped,
        start.elapsed().as_secs_f64()
    );
    Ok(report)
}

/// Run every example of one spec, adding the outcomes to `report`.
///
/// `example_index` in the hooks' metadata counts from the examples already
/// in `report`, so it stays unique across the specs of a run.
pub fn run_world(world: &mut World, focus_mode: bool, report: &mut RunReport) {
    let ids: Vec<ExampleId> = world.examples().map(|(id, _)| id).collect();

    for id in ids {
        let mut metadata = world.metadata(id);
        metadata.example_index = report.visited();

        if metadata.flags.is_pending() {
            log::info!("pending: {}", metadata.full_description);
            report.pending += 1;
            continue;
        }

        if focus_mode && !metadata.flags.is_focused() {
            report.skipped += 1;
            continue;
        }

        match run_example(world, &metadata) {
            Ok(()) => {
                log::debug!("passed: {}", metadata.full_description);
                report.passed += 1;
            }
            Err(msg) => {
                log::warn!(
                    "failed: {} ({}): {msg}",
                    metadata.full_description,
                    metadata.callsite
                );
                report.failed += 1;
                report
                    .failures
                    .push(format!("{}: {msg}", metadata.full_description));
            }
        }
    }
}

/// Run one example with its group hooks. Returns the panic message on failure.
pub fn run_example(world: &mut World, metadata: &ExampleMetadata) -> Result<(), String> {
    let chain = world.ancestors(metadata.example);
    let before: Vec<Hook> = chain
        .iter()
        .flat_map(|id| world.group(*id).hooks().before.iter().cloned())
        .collect();
    let after: Vec<Hook> = chain
        .iter()
        .rev()
        .flat_map(|id| world.group(*id).hooks().after.iter().cloned())
        .collect();
    let body = world.example(metadata.example).body();

    let outcome = world
        .executing(ContextDescriptor::BeforeEach, |w| {
            catch_unwind(AssertUnwindSafe(|| {
                for hook in &before {
                    hook.call(w, metadata);
                }
            }))
        })
        .and_then(|()| {
            world.executing(ContextDescriptor::It, |w| {
                catch_unwind(AssertUnwindSafe(|| body(w)))
            })
        });

    let cleanup = world.executing(ContextDescriptor::AfterEach, |w| {
        catch_unwind(AssertUnwindSafe(|| {
            for hook in &after {
                hook.call(w, metadata);
            }
        }))
    });

    outcome.and(cleanup).map_err(|e| {
        if let Some(s) = e.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = e.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        }
    })
}

fn has_focus(world: &World) -> bool {
    world
        .examples()
        .any(|(id, _)| world.effective_flags(id).is_focused())
}
