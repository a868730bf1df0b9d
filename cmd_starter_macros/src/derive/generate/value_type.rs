//! Mapping of Rust field types onto `ValueType` expressions.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::Type;

use crate::derive::parse::{option_inner, plain_ident, vec_inner};

/// Builds the `ValueType` expression for a field of type `ty`.
///
/// `Option<T>` is transparent and `Vec<T>` becomes a list. Types outside the
/// known scalar set map to `ValueType::Custom` carrying the written type.
pub(crate) fn tokens(ty: &Type, krate: &TokenStream) -> TokenStream {
    if let Some(inner) = option_inner(ty) {
        return tokens(inner, krate);
    }
    if let Some(element) = vec_inner(ty) {
        let of = tokens(element, krate);
        return quote! { #krate::ValueType::list(#of) };
    }
    let Some(ident) = plain_ident(ty) else {
        return custom(ty, krate);
    };
    match ident.as_str() {
        "bool" => quote! { #krate::ValueType::Bool },
        "String" | "str" | "char" => quote! { #krate::ValueType::String },
        "PathBuf" | "Path" => quote! { #krate::ValueType::Path },
        "f32" => quote! { #krate::ValueType::Float { bits: 32 } },
        "f64" => quote! { #krate::ValueType::Float { bits: 64 } },
        other => integer(other).map_or_else(
            || custom(ty, krate),
            |(bits, signed)| quote! { #krate::ValueType::Integer { bits: #bits, signed: #signed } },
        ),
    }
}

fn integer(ident: &str) -> Option<(u8, bool)> {
    let (signed, width) = match ident.split_at_checked(1)? {
        ("i", width) => (true, width),
        ("u", width) => (false, width),
        _ => return None,
    };
    let bits = match width {
        "8" => 8,
        "16" => 16,
        "32" => 32,
        "64" | "size" => 64,
        "128" => 128,
        _ => return None,
    };
    Some((bits, signed))
}

fn custom(ty: &Type, krate: &TokenStream) -> TokenStream {
    let name: String = ty
        .to_token_stream()
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    quote! { #krate::ValueType::Custom { name: ::std::string::String::from(#name) } }
}
