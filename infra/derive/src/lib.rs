#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the reviewer crates.
//! Two attribute macros live here: [`reviewer_error`] for per-crate error enums and
//! [`reviewer_service`] for the `Arc`-backed handles registered with the composition root.
//!
//! Examples are `ignore`d because they need the consuming crates in scope; the same
//! snippets are compiled through `trybuild` in `tests/`.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Turns an enum into a reviewer error type.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>` and for
///   `Result<T, SourceError>` of every variant that wraps a source.
/// * `From<SourceError>` for variants with a `source` field (or a `#[source]`/`#[from]` field).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant exists.
/// * A module-private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants use named fields. A variant with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[reviewer_derive::reviewer_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<Settings, ConfigError> {
///     builder.build().context("Failed to build config")?.try_deserialize().map_err(Into::into)
/// }
/// ```
#[proc_macro_attribute]
pub fn reviewer_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}

/// Turns a struct into a service handle bound to a `ComponentToken`.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is a cheap-to-clone `Arc` wrapper with
/// `new`, `Deref<Target = <Name>Inner>`, a `TOKEN` constant and an implementation of
/// `reviewer_kernel::domain::registry::Service`.
///
/// # Example
/// ```rust,ignore
/// #[reviewer_derive::reviewer_service(token = HighlightService)]
/// pub struct HighlightService {}
///
/// let service = HighlightService::new(HighlightServiceInner {});
/// assert_eq!(HighlightService::TOKEN, ComponentToken::HighlightService);
/// ```
#[proc_macro_attribute]
pub fn reviewer_service(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::service::expand(args.into(), input).into()
}
