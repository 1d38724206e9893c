//! Proc macros for the `quickspec` BDD specification DSL.

mod codegen;
mod dsl;

/// A Quick-style keyword DSL that expands into `quickspec::World` calls.
///
/// The macro evaluates to a closure
/// `|world: &mut quickspec::World| -> Result<(), quickspec::DslError>`, so it
/// can be handed straight to `Suite::spec`.
///
/// # Example
///
/// ```text
/// suite.spec("Calculator", quickspec::spec! {
///     describe "addition" {
///         before_each { reset(); }
///
///         it "adds two numbers" {
///             assert_eq!(2 + 3, 5);
///         }
///
///         context "with negative numbers" {
///             it "handles negatives" {
///                 assert_eq!(-1 + 3, 2);
///             }
///         }
///
///         it_behaves_like "a commutative operation" { "op" => "+" };
///     }
/// })?;
/// ```
///
/// # Supported DSL keywords
///
/// ## Groups
/// - `describe "name" { ... }` / `context "name" { ... }`
/// - `fdescribe` / `fcontext`: focused
/// - `xdescribe` / `xcontext`: pending
///
/// ## Examples
/// - `it "name" { ... }`, `fit` (focused), `xit` (pending)
///
/// ## Hooks
/// - `before_each { ... }` / `after_each { ... }`
/// - `before_suite { ... }` / `after_suite { ... }`
///
/// ## Shared examples
/// - `it_behaves_like "name";`
/// - `it_behaves_like "name" { "key" => expr, ... };`: passes a context
///
/// ## Pending
/// - `pending "name" { ... }`: recorded as a notice, contents never declared
///
/// Example and hook bodies become `move` closures: they may use statics and
/// `Copy` values from the surrounding scope. Nesting rules are checked when
/// the closure runs, exactly as for hand-written builder calls.
#[proc_macro]
pub fn spec(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let spec = syn::parse_macro_input!(input as dsl::Spec);
    codegen::generate(spec).into()
}
