use fxhash::FxHashSet;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ItemFn, ItemStruct, Lit, LitBool, LitStr, MetaNameValue, Token};

/// Expands `#[api_model]`.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    match api_model_tokens(args, &input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

/// Expands `#[api_handler]`.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

#[derive(Default)]
struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<LitBool>,
}

#[derive(Default)]
struct SerdeState {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

fn api_model_tokens(args: TokenStream, input: &ItemStruct) -> Result<TokenStream, syn::Error> {
    let args = parse_model_args(args)?;
    let derives = derived_trait_names(&input.attrs);
    let serde = serde_state(&input.attrs)?;

    let missing: Vec<TokenStream> = [
        ("Debug", quote! { Debug }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ]
    .into_iter()
    .filter(|(name, _)| !derives.contains(*name))
    .map(|(_, tokens)| tokens)
    .collect();
    let derive_attr = if missing.is_empty() { quote! {} } else { quote! { #[derive(#(#missing),*)] } };

    let schema_attr = if derives.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    };

    let wanted_case =
        args.rename_all.unwrap_or_else(|| LitStr::new("camelCase", Span::call_site()));
    let rename_attr = match &serde.rename_all {
        Some(existing) if existing.value() != wanted_case.value() => {
            return Err(syn::Error::new_spanned(
                existing,
                "Conflicting serde rename_all; remove it or pass api_model(rename_all = \"...\")",
            ));
        }
        Some(_) => quote! {},
        None => quote! { #[serde(rename_all = #wanted_case)] },
    };

    let deny = args.deny_unknown_fields.as_ref().is_none_or(LitBool::value);
    let deny_attr = match (serde.deny_unknown_fields, deny) {
        (true, false) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "deny_unknown_fields is already set via serde; remove it before disabling",
            ));
        }
        (false, true) => quote! { #[serde(deny_unknown_fields)] },
        _ => quote! {},
    };

    Ok(quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #deny_attr
        #input
    })
}

fn parse_model_args(args: TokenStream) -> Result<ModelArgs, syn::Error> {
    let metas = Punctuated::<MetaNameValue, Token![,]>::parse_terminated.parse2(args)?;
    let mut parsed = ModelArgs::default();

    for meta in metas {
        let Expr::Lit(expr) = &meta.value else {
            return Err(syn::Error::new_spanned(&meta.value, "expected a literal value"));
        };

        if meta.path.is_ident("rename_all") {
            let Lit::Str(lit) = &expr.lit else {
                return Err(syn::Error::new_spanned(&expr.lit, "rename_all must be a string"));
            };
            if parsed.rename_all.replace(lit.clone()).is_some() {
                return Err(syn::Error::new_spanned(&meta, "Duplicate argument"));
            }
        } else if meta.path.is_ident("deny_unknown_fields") {
            let Lit::Bool(lit) = &expr.lit else {
                return Err(syn::Error::new_spanned(
                    &expr.lit,
                    "deny_unknown_fields must be a boolean",
                ));
            };
            if parsed.deny_unknown_fields.replace(lit.clone()).is_some() {
                return Err(syn::Error::new_spanned(&meta, "Duplicate argument"));
            }
        } else {
            return Err(syn::Error::new_spanned(
                &meta.path,
                "Unsupported argument; expected rename_all or deny_unknown_fields",
            ));
        }
    }

    Ok(parsed)
}

fn serde_state(attrs: &[Attribute]) -> Result<SerdeState, syn::Error> {
    let mut state = SerdeState::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                state.rename_all = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                state.deny_unknown_fields = true;
            } else if meta.input.peek(Token![=]) {
                let _: Expr = meta.value()?.parse()?;
            }
            Ok(())
        })?;
    }
    Ok(state)
}

fn derived_trait_names(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                traits.insert(last.ident.to_string());
            }
            Ok(())
        });
    }
    traits
}
