use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, ItemFn, ReturnType, Type};

/// Expands `#[mlife_runtime::main(profile)]`.
#[must_use]
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    if input.sig.asyncness.is_none() {
        return Error::new_spanned(
            input.sig.fn_token,
            "#[mlife_runtime::main] can only be applied to async functions",
        )
        .to_compile_error();
    }

    if !returns_result(&input.sig.output) {
        return Error::new_spanned(
            &input.sig.output,
            "#[mlife_runtime::main] requires a Result return type",
        )
        .to_compile_error();
    }

    let profile = match profile_tokens(args) {
        Ok(profile) => profile,
        Err(err) => return err.to_compile_error(),
    };

    let ItemFn { attrs, vis, sig, block } = input;
    let name = &sig.ident;
    let output = &sig.output;

    quote! {
        #(#attrs)*
        #vis fn #name() #output {
            let profile = #profile;
            let rt = ::mlife_runtime::build_runtime(&profile)?;
            rt.block_on(async #block)
        }
    }
}

fn profile_tokens(args: TokenStream) -> Result<TokenStream, Error> {
    if args.is_empty() {
        return Ok(quote! { ::mlife_runtime::RuntimeProfile::default() });
    }

    let ident: syn::Ident = syn::parse2(args)?;
    match ident.to_string().as_str() {
        "high_performance" => Ok(quote! { ::mlife_runtime::RuntimeProfile::high_performance() }),
        "current_thread" => Ok(quote! { ::mlife_runtime::RuntimeProfile::current_thread() }),
        "default" => Ok(quote! { ::mlife_runtime::RuntimeProfile::default() }),
        _ => Err(Error::new_spanned(
            ident,
            "Unknown runtime profile. Use: high_performance, current_thread, or default",
        )),
    }
}

fn returns_result(output: &ReturnType) -> bool {
    let ReturnType::Type(_, ty) = output else {
        return false;
    };
    let Type::Path(path) = &**ty else {
        return false;
    };
    path.path.segments.last().is_some_and(|seg| seg.ident == "Result")
}
