//! Code generation: turns the DSL AST into calls on a `quickspec::World`.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{quote, quote_spanned};

use crate::dsl::*;

/// Expand a spec into a closure
/// `|world: &mut World| -> Result<(), DslError>`.
pub fn generate(spec: Spec) -> TokenStream {
    let world = world_ident();
    let body = generate_items(&spec.items);
    quote! {
        |#world: &mut ::quickspec::World| -> ::core::result::Result<(), ::quickspec::DslError> {
            #body
            ::core::result::Result::Ok(())
        }
    }
}

fn world_ident() -> Ident {
    Ident::new("__quickspec_world", Span::call_site())
}

fn generate_items(items: &[DslItem]) -> TokenStream {
    items.iter().map(generate_item).collect()
}

/// A nested group body: the same closure shape as the top level.
fn generate_block(items: &[DslItem]) -> TokenStream {
    let world = world_ident();
    let body = generate_items(items);
    quote! {
        |#world: &mut ::quickspec::World| {
            #body
            ::core::result::Result::Ok(())
        }
    }
}

fn generate_item(item: &DslItem) -> TokenStream {
    let world = world_ident();

    match item {
        DslItem::Group(group) => {
            let method = match (group.is_context, group.marker) {
                (false, Marker::None) => "describe",
                (false, Marker::Focused) => "fdescribe",
                (false, Marker::Pending) => "xdescribe",
                (true, Marker::None) => "context",
                (true, Marker::Focused) => "fcontext",
                (true, Marker::Pending) => "xcontext",
            };
            let method = Ident::new(method, group.keyword.span());
            let name = &group.name;
            let block = generate_block(&group.items);
            quote! {
                #world.#method(#name, #block)?;
            }
        }

        DslItem::It(it) => {
            let method = match it.marker {
                Marker::None => "it",
                Marker::Focused => "fit",
                Marker::Pending => "xit",
            };
            let method = Ident::new(method, it.keyword.span());
            let name = &it.name;
            let body = &it.body;
            // Spanned at the keyword so the recorded callsite is the DSL line.
            quote_spanned! {it.keyword.span()=>
                #world.#method(#name, move |_: &mut ::quickspec::World| { #body })?;
            }
        }

        DslItem::BeforeEach(hook) => {
            let body = &hook.body;
            quote! {
                #world.before_each(move |_: &mut ::quickspec::World| { #body })?;
            }
        }

        DslItem::AfterEach(hook) => {
            let body = &hook.body;
            quote! {
                #world.after_each(move |_: &mut ::quickspec::World| { #body })?;
            }
        }

        DslItem::BeforeSuite(hook) => {
            let body = &hook.body;
            quote! {
                #world.before_suite(move || { #body })?;
            }
        }

        DslItem::AfterSuite(hook) => {
            let body = &hook.body;
            quote! {
                #world.after_suite(move || { #body })?;
            }
        }

        DslItem::ItBehavesLike(item) => {
            let name = &item.name;
            match &item.context {
                None => quote_spanned! {item.keyword.span()=>
                    #world.it_behaves_like(#name)?;
                },
                Some(entries) => {
                    let keys = entries.iter().map(|(k, _)| k);
                    let values = entries.iter().map(|(_, v)| v);
                    quote_spanned! {item.keyword.span()=>
                        #world.it_behaves_like_with_context(#name, || {
                            ::quickspec::SharedExampleContext::new()
                                #(.with(#keys, #values))*
                        })?;
                    }
                }
            }
        }

        DslItem::Pending(pending) => {
            let name = &pending.name;
            let block = generate_block(&pending.items);
            quote! {
                #world.pending(#name, #block);
            }
        }
    }
}
