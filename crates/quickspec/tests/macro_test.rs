use quickspec::runner::{run_suite, RunConfig};
use quickspec::{Notice, Suite, World};
use std::sync::atomic::{AtomicU32, Ordering};

// ============================================================================
// Keyword DSL builds the same tree as builder calls
// ============================================================================

#[test]
fn nested_groups_and_examples() {
    let mut world = World::new("Calculator");
    let build = quickspec::spec! {
        describe "Calculator" {
            it "adds two numbers" {
                assert_eq!(2 + 3, 5);
            }

            context "with negative numbers" {
                it "handles negatives" {
                    assert_eq!(-1 + 3, 2);
                }
            }

            describe "Division" {
                it "divides evenly" {
                    assert_eq!(10 / 2, 5);
                }

                xit "handles division by zero" {}
            }
        }
    };
    build(&mut world).unwrap();

    assert_eq!(world.example_count(), 4);
    assert_eq!(world.group_count(), 4);
    let descriptions: Vec<String> = world
        .examples()
        .map(|(id, _)| world.full_description(id))
        .collect();
    assert_eq!(
        descriptions,
        vec![
            "Calculator adds two numbers",
            "Calculator with negative numbers handles negatives",
            "Calculator Division divides evenly",
            "Calculator Division handles division by zero",
        ]
    );

    let (last, _) = world.examples().last().unwrap();
    assert!(world.effective_flags(last).is_pending());
}

#[test]
fn callsites_point_at_the_test_file() {
    let mut world = World::new("callsite");
    let build = quickspec::spec! {
        it "records where it was declared" {}
    };
    build(&mut world).unwrap();

    let (_, example) = world.examples().next().unwrap();
    assert!(example.callsite().file.ends_with("macro_test.rs"));
}

#[test]
fn focus_and_pending_prefixes() {
    let mut world = World::new("flags");
    let build = quickspec::spec! {
        fdescribe "focused group" {
            it "inherits focus" {}
        }
        xcontext "pending group" {
            it "inherits pending" {}
        }
        fit "focused example" {}
    };
    build(&mut world).unwrap();

    let flags: Vec<(bool, bool)> = world
        .examples()
        .map(|(id, _)| {
            let flags = world.effective_flags(id);
            (flags.is_focused(), flags.is_pending())
        })
        .collect();
    assert_eq!(flags, vec![(true, false), (false, true), (true, false)]);
}

// ============================================================================
// Hooks, shared examples and pending through a suite
// ============================================================================

static BEFORE: AtomicU32 = AtomicU32::new(0);
static AFTER: AtomicU32 = AtomicU32::new(0);
static SUITE_BEFORE: AtomicU32 = AtomicU32::new(0);

#[test]
fn hooks_and_shared_examples_run() {
    let mut suite = Suite::new();
    suite
        .shared_examples("a sized collection", |w, ctx| {
            let size = *ctx.get::<usize>("size").unwrap();
            w.it("has the expected size", move |_| assert_eq!(size, 3))
        })
        .unwrap();

    suite
        .spec(
            "macro suite",
            quickspec::spec! {
                before_suite {
                    SUITE_BEFORE.fetch_add(1, Ordering::SeqCst);
                }

                describe "hooks" {
                    before_each {
                        BEFORE.fetch_add(1, Ordering::SeqCst);
                    }
                    after_each {
                        AFTER.fetch_add(1, Ordering::SeqCst);
                    }

                    it "sees before_each" {
                        assert!(BEFORE.load(Ordering::SeqCst) >= 1);
                    }

                    it_behaves_like "a sized collection" { "size" => 3usize };
                }

                pending "not written yet" {
                    it "would fail" { panic!("never declared"); }
                }
            },
        )
        .unwrap();

    let world = &suite.specs()[0];
    assert_eq!(world.example_count(), 2);
    assert_eq!(
        world.notices(),
        &[Notice::Pending {
            description: "not written yet".into()
        }]
    );

    let report = run_suite(&mut suite, &RunConfig::default()).unwrap();
    assert!(report.succeeded(), "{:?}", report.failures);
    assert_eq!(report.executed(), 2);
    assert_eq!(BEFORE.load(Ordering::SeqCst), 2);
    assert_eq!(AFTER.load(Ordering::SeqCst), 2);
    assert_eq!(SUITE_BEFORE.load(Ordering::SeqCst), 1);
}

#[test]
fn missing_shared_example_fails_the_build() {
    let mut suite = Suite::new();
    let err = suite
        .spec(
            "missing",
            quickspec::spec! {
                describe "group" {
                    it_behaves_like "nothing by this name";
                }
            },
        )
        .unwrap_err();

    assert_eq!(err.to_string(), "unknown shared example 'nothing by this name'");
}
