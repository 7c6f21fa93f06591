#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! * [`macro@paw_error`] turns a plain enum into a `thiserror` error with context support.
//! * [`macro@api_model`] applies the serde policy used for external API payloads.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own macros in doctests;
//! see `tests/` for compiled usage.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro defining a data model exchanged with an external API.
///
/// # Injected Behaviors
///
/// * **Derives**: adds `Debug`, `Serialize` and `Deserialize` unless already derived.
/// * **Serde Policy**:
///     * `rename_all = "snake_case"` by default (can be overridden).
///     * `deny_unknown_fields` by default (can be disabled).
///
/// # Arguments
///
/// * `rename_all = "camelCase"` - Overrides the default Serde rename policy.
/// * `deny_unknown_fields = false` - Tolerates keys the model does not declare.
///
/// # Example
///
/// ```rust,ignore
/// use paw_derive::api_model;
///
/// #[api_model(deny_unknown_fields = false)]
/// pub struct Measure {
///     pub imperial: String,
///     pub metric: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Attribute macro for defining domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field
///   (or a field marked `#[source]`/`#[from]`), enabling the `?` operator for upstream errors.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping an upstream error must also carry a context field.
/// 4. Tuple or unit variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use paw_derive::paw_error;
/// use std::borrow::Cow;
///
/// #[paw_error]
/// pub enum ContractError {
///     #[error("Decode error{}: {source}", format_context(.context))]
///     Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Invalid payload{}: {message}", format_context(.context))]
///     Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(raw: &str) -> Result<serde_json::Value, ContractError> {
///     serde_json::from_str(raw).context("Decoding image search response")
/// }
/// ```
#[proc_macro_attribute]
pub fn paw_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
