use super::derived_trait_names;
use fxhash::FxHashSet;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ItemStruct, Lit, LitStr, Meta, MetaNameValue, Token};

const DEFAULT_RENAME_ALL: &str = "snake_case";

struct ApiModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

/// Serde options already present on the annotated struct.
struct SerdeMetaInfo {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

/// Expands the `#[api_model]` attribute macro.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    match try_expand(args, &input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn try_expand(args: TokenStream, input: &ItemStruct) -> syn::Result<TokenStream> {
    let args = parse_args(args)?;
    let serde_meta = serde_meta_info(&input.attrs)?;
    let derive_attr = derive_attr(&derived_trait_names(&input.attrs));
    let rename_attr = rename_attr(args.rename_all, &serde_meta)?;
    let deny_attr = deny_unknown_attr(args.deny_unknown_fields, &serde_meta, input)?;

    Ok(quote! {
        #derive_attr
        #rename_attr
        #deny_attr
        #input
    })
}

fn parse_args(args: TokenStream) -> syn::Result<ApiModelArgs> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;

    let mut parsed = ApiModelArgs { rename_all: None, deny_unknown_fields: None };

    for meta in metas {
        let Meta::NameValue(name_value) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "Expected name-value arguments like `rename_all = \"...\"`",
            ));
        };

        if name_value.path.is_ident("rename_all") {
            ensure_unset(parsed.rename_all.is_some(), &name_value)?;
            parsed.rename_all = Some(string_literal(&name_value)?);
        } else if name_value.path.is_ident("deny_unknown_fields") {
            ensure_unset(parsed.deny_unknown_fields.is_some(), &name_value)?;
            parsed.deny_unknown_fields = Some(bool_literal(&name_value)?);
        } else {
            return Err(syn::Error::new_spanned(
                name_value.path,
                "Unsupported argument; expected rename_all or deny_unknown_fields",
            ));
        }
    }

    Ok(parsed)
}

fn ensure_unset(already_set: bool, token: &MetaNameValue) -> syn::Result<()> {
    if already_set {
        return Err(syn::Error::new_spanned(token, "Duplicate argument"));
    }
    Ok(())
}

fn literal(name_value: &MetaNameValue) -> Option<&Lit> {
    match &name_value.value {
        Expr::Lit(expr_lit) => Some(&expr_lit.lit),
        _ => None,
    }
}

fn bool_literal(name_value: &MetaNameValue) -> syn::Result<bool> {
    match literal(name_value) {
        Some(Lit::Bool(lit)) => Ok(lit.value),
        _ => Err(syn::Error::new_spanned(
            &name_value.value,
            "deny_unknown_fields must be a boolean literal",
        )),
    }
}

fn string_literal(name_value: &MetaNameValue) -> syn::Result<LitStr> {
    match literal(name_value) {
        Some(Lit::Str(lit)) => Ok(lit.clone()),
        _ => Err(syn::Error::new_spanned(&name_value.value, "rename_all must be a string literal")),
    }
}

fn derive_attr(derives: &FxHashSet<String>) -> TokenStream {
    let mut tokens = Vec::new();
    if !derives.contains("Debug") {
        tokens.push(quote! { Debug });
    }
    if !derives.contains("Serialize") {
        tokens.push(quote! { ::serde::Serialize });
    }
    if !derives.contains("Deserialize") {
        tokens.push(quote! { ::serde::Deserialize });
    }

    if tokens.is_empty() { quote! {} } else { quote! { #[derive(#(#tokens),*)] } }
}

fn rename_attr(rename_all: Option<LitStr>, serde_meta: &SerdeMetaInfo) -> syn::Result<TokenStream> {
    let wanted = rename_all.unwrap_or_else(|| LitStr::new(DEFAULT_RENAME_ALL, Span::call_site()));

    match &serde_meta.rename_all {
        Some(existing) if existing.value() != wanted.value() => Err(syn::Error::new_spanned(
            existing,
            "Conflicting serde rename_all; remove it or set api_model(rename_all = \"...\") to match",
        )),
        Some(_) => Ok(quote! {}),
        None => Ok(quote! { #[serde(rename_all = #wanted)] }),
    }
}

fn deny_unknown_attr(
    deny_unknown_fields: Option<bool>,
    serde_meta: &SerdeMetaInfo,
    input: &ItemStruct,
) -> syn::Result<TokenStream> {
    let deny_unknown = deny_unknown_fields.unwrap_or(true);

    match (serde_meta.deny_unknown_fields, deny_unknown) {
        (true, false) => Err(syn::Error::new_spanned(
            &input.ident,
            "deny_unknown_fields is already set via serde; remove it before disabling",
        )),
        (false, true) => Ok(quote! { #[serde(deny_unknown_fields)] }),
        _ => Ok(quote! {}),
    }
}

fn serde_meta_info(attrs: &[Attribute]) -> syn::Result<SerdeMetaInfo> {
    let mut info = SerdeMetaInfo { rename_all: None, deny_unknown_fields: false };

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                info.rename_all = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                info.deny_unknown_fields = true;
            } else if meta.input.peek(Token![=]) {
                // Skip the value of options this macro does not manage (e.g. `default = "..."`).
                let _: Expr = meta.value()?.parse()?;
            }
            Ok(())
        })?;
    }

    Ok(info)
}
