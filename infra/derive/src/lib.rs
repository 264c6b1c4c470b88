#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the life-estimation workspace.
//!
//! * [`macro@mlife_error`] turns an enum into a `thiserror` error with context support
//!   and a stable wire `kind()`.
//! * [`macro@api_model`] / [`macro@api_handler`] keep HTTP DTOs and handlers consistent
//!   with the `OpenAPI` document.
//! * [`macro@main`] bootstraps the Tokio runtime with a named profile.
//!
//! Examples are `ignore`d because proc-macro crates cannot use their own macros in doctests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap the Tokio runtime for a binary.
///
/// Transforms an `async fn main` returning `Result` into a synchronous `fn main`
/// that builds a runtime through `mlife_runtime` and blocks on the body.
///
/// # Profiles
///
/// * `high_performance` - multi-threaded scheduler for the HTTP server.
/// * `current_thread` - single-threaded scheduler for short-lived CLI invocations.
/// * `default` (or no argument) - multi-threaded with auto-detected worker count.
///
/// # Examples
///
/// ```rust,ignore
/// #[mlife_runtime::main(current_thread)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Defines an API data transfer object.
///
/// * Adds `Debug`, `Serialize` and `Deserialize` derives when missing.
/// * Adds `utoipa::ToSchema` behind the consuming crate's `server` feature.
/// * Applies `#[serde(rename_all = "camelCase")]` and `#[serde(deny_unknown_fields)]`
///   unless overridden with `rename_all = "..."` / `deny_unknown_fields = false`.
///
/// ```rust,ignore
/// #[api_model]
/// pub struct EstimateRequest {
///     pub usage_hours_per_year: f64,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Registers an Axum handler with the `OpenAPI` document.
///
/// Accepts the usual `utoipa::path` arguments and only emits the path
/// attribute when the consuming crate enables its `server` feature.
///
/// ```rust,ignore
/// #[api_handler(post, path = "/estimate", responses((status = OK, body = EstimateResponse)))]
/// pub async fn estimate_handler(Json(body): Json<EstimateRequest>) -> impl IntoResponse { .. }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Declares a domain error enum.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Name>Ext` trait with `.context(...)` for `Result<T, Name>` and, for each
///   variant with a `source` field, for `Result<T, Source>`.
/// * `From<Source>` for every variant carrying a source.
/// * `From<&'static str>` / `From<String>` when an `Internal` variant exists.
/// * `kind(&self) -> &'static str` returning `"<Variant>Error"`, used as the
///   stable error code in HTTP bodies.
///
/// # Requirements
///
/// Every variant uses named fields. Variants with a source must carry
/// `context: Option<Cow<'static, str>>`.
///
/// ```rust,ignore
/// #[mlife_error]
/// pub enum EstimatorError {
///     #[error("Invalid input{}: {message}", format_context(.context))]
///     InvalidInput { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// assert_eq!(err.kind(), "InvalidInputError");
/// ```
#[proc_macro_attribute]
pub fn mlife_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
