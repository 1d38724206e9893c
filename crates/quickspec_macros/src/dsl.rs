//! DSL AST types and `syn::parse::Parse` implementations.
//!
//! Parses the Quick-style keyword syntax into a structured AST.

use proc_macro2::TokenStream;
use syn::parse::{Parse, ParseStream};
use syn::{braced, Expr, Ident, LitStr, Result, Token};

// ============================================================================
// AST types
// ============================================================================

/// Top-level spec body: a list of DSL items.
#[derive(Debug)]
pub struct Spec {
    pub items: Vec<DslItem>,
}

/// A single DSL node.
#[derive(Debug)]
pub enum DslItem {
    Group(GroupBlock),
    It(ItBlock),
    BeforeEach(HookBlock),
    AfterEach(HookBlock),
    BeforeSuite(HookBlock),
    AfterSuite(HookBlock),
    ItBehavesLike(ItBehavesLikeItem),
    Pending(PendingBlock),
}

/// How a group or example is flagged by its keyword prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    None,
    Focused,
    Pending,
}

/// `describe "name" { ... }` / `context "name" { ... }` and their `f`/`x` forms.
#[derive(Debug)]
pub struct GroupBlock {
    pub keyword: Ident,
    pub is_context: bool,
    pub marker: Marker,
    pub name: LitStr,
    pub items: Vec<DslItem>,
}

/// `it "name" { ... }` / `fit` / `xit`
#[derive(Debug)]
pub struct ItBlock {
    pub keyword: Ident,
    pub marker: Marker,
    pub name: LitStr,
    pub body: TokenStream,
}

/// `before_each { ... }` and friends.
#[derive(Debug)]
pub struct HookBlock {
    pub body: TokenStream,
}

/// `it_behaves_like "name";` or `it_behaves_like "name" { "key" => expr, ... }`
#[derive(Debug)]
pub struct ItBehavesLikeItem {
    pub keyword: Ident,
    pub name: LitStr,
    pub context: Option<Vec<(LitStr, Expr)>>,
}

/// `pending "name" { items... }`: parsed so it stays well-formed, never run.
#[derive(Debug)]
pub struct PendingBlock {
    pub name: LitStr,
    pub items: Vec<DslItem>,
}

// ============================================================================
// Parsing
// ============================================================================

impl Parse for Spec {
    fn parse(input: ParseStream) -> Result<Self> {
        let items = parse_items(input)?;
        Ok(Spec { items })
    }
}

/// Parse a sequence of DSL items until the stream is exhausted.
fn parse_items(input: ParseStream) -> Result<Vec<DslItem>> {
    let mut items = Vec::new();
    while !input.is_empty() {
        items.push(input.parse::<DslItem>()?);
    }
    Ok(items)
}

impl Parse for DslItem {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: Ident = input.parse()?;
        let name = ident.to_string();

        match name.as_str() {
            // Groups
            "describe" => parse_group(input, ident, false, Marker::None),
            "fdescribe" => parse_group(input, ident, false, Marker::Focused),
            "xdescribe" => parse_group(input, ident, false, Marker::Pending),
            "context" => parse_group(input, ident, true, Marker::None),
            "fcontext" => parse_group(input, ident, true, Marker::Focused),
            "xcontext" => parse_group(input, ident, true, Marker::Pending),

            // Examples
            "it" => parse_it(input, ident, Marker::None),
            "fit" => parse_it(input, ident, Marker::Focused),
            "xit" => parse_it(input, ident, Marker::Pending),

            // Hooks
            "before_each" => Ok(DslItem::BeforeEach(parse_hook_block(input)?)),
            "after_each" => Ok(DslItem::AfterEach(parse_hook_block(input)?)),
            "before_suite" => Ok(DslItem::BeforeSuite(parse_hook_block(input)?)),
            "after_suite" => Ok(DslItem::AfterSuite(parse_hook_block(input)?)),

            // Shared examples
            "it_behaves_like" => Ok(DslItem::ItBehavesLike(parse_it_behaves_like(
                input, ident,
            )?)),

            "pending" => {
                let name: LitStr = input.parse()?;
                let content;
                braced!(content in input);
                let items = parse_items(&content)?;
                Ok(DslItem::Pending(PendingBlock { name, items }))
            }

            _ => Err(syn::Error::new(
                ident.span(),
                format!(
                    "unknown DSL keyword `{name}`. Expected one of: \
                     describe, context, it, before_each, after_each, before_suite, \
                     after_suite, it_behaves_like, pending \
                     (with optional f/x prefix on describe, context and it)"
                ),
            )),
        }
    }
}

// ============================================================================
// Block parsers
// ============================================================================

/// Parse: `"name" { items... }`
fn parse_group(
    input: ParseStream,
    keyword: Ident,
    is_context: bool,
    marker: Marker,
) -> Result<DslItem> {
    let name: LitStr = input.parse()?;
    let content;
    braced!(content in input);
    let items = parse_items(&content)?;
    Ok(DslItem::Group(GroupBlock {
        keyword,
        is_context,
        marker,
        name,
        items,
    }))
}

/// Parse: `"name" { body }`
fn parse_it(input: ParseStream, keyword: Ident, marker: Marker) -> Result<DslItem> {
    let name: LitStr = input.parse()?;
    let content;
    braced!(content in input);
    let body: TokenStream = content.parse()?;
    Ok(DslItem::It(ItBlock {
        keyword,
        marker,
        name,
        body,
    }))
}

/// Parse: `{ body }`
fn parse_hook_block(input: ParseStream) -> Result<HookBlock> {
    let content;
    braced!(content in input);
    let body: TokenStream = content.parse()?;
    Ok(HookBlock { body })
}

/// Parse: `"name" [{ "key" => expr, ... }] [;]`
fn parse_it_behaves_like(input: ParseStream, keyword: Ident) -> Result<ItBehavesLikeItem> {
    let name: LitStr = input.parse()?;

    let context = if input.peek(syn::token::Brace) {
        let content;
        braced!(content in input);
        let mut entries = Vec::new();
        while !content.is_empty() {
            let key: LitStr = content.parse()?;
            content.parse::<Token![=>]>()?;
            let value: Expr = content.parse()?;
            entries.push((key, value));
            if !content.is_empty() {
                content.parse::<Token![,]>()?;
            }
        }
        Some(entries)
    } else {
        None
    };

    if input.peek(Token![;]) {
        input.parse::<Token![;]>()?;
    }

    Ok(ItBehavesLikeItem {
        keyword,
        name,
        context,
    })
}
