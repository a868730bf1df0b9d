//! Code generation for `#[derive(Reflect)]`.

mod value_type;

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{ParsedField, ParsedInput};

/// Generates the `Reflect` impl and, for global containers, the
/// `GlobalOptionsContainer` impl.
pub(crate) fn reflect_impl(input: &ParsedInput, krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let name = input
        .attrs
        .rename
        .clone()
        .unwrap_or_else(|| ident.to_string());
    let namespace = input.attrs.namespace.as_ref().map_or_else(
        || quote! { ::core::module_path!() },
        |namespace| quote! { #namespace },
    );
    let capability = input.attrs.global.then(|| quote! { .global() });
    let properties = input.fields.iter().map(|field| property(field, krate));
    let container = input.attrs.global.then(|| {
        quote! {
            impl #impl_generics #krate::GlobalOptionsContainer for #ident #ty_generics #where_clause {}
        }
    });

    quote! {
        impl #impl_generics #krate::Reflect for #ident #ty_generics #where_clause {
            fn type_info() -> #krate::TypeInfo {
                #krate::TypeInfo::new(#namespace, #name)
                    #capability
                    #( .with_property(#properties) )*
            }
        }

        #container
    }
}

fn property(field: &ParsedField, krate: &TokenStream) -> TokenStream {
    let name = &field.name;
    let value_type = value_type::tokens(&field.ty, krate);
    let markers = markers(field, krate);
    quote! {
        #krate::PropertyInfo::new(#name, #value_type)
            .with_markers(::std::vec![#(#markers),*])
    }
}

fn markers(field: &ParsedField, krate: &TokenStream) -> Vec<TokenStream> {
    let attrs = &field.attrs;
    let mut out = Vec::new();
    if attrs.required {
        out.push(quote! { #krate::Marker::Required });
    }
    if attrs.hidden {
        out.push(quote! { #krate::Marker::Hidden });
    }
    if !attrs.aliases.is_empty() {
        let aliases = &attrs.aliases;
        out.push(quote! { #krate::Marker::alias([#(#aliases),*]) });
    }
    out.extend(
        attrs
            .description_fragments()
            .into_iter()
            .map(|text| quote! { #krate::Marker::description(#text) }),
    );
    out.extend(attrs.completions.iter().map(|path| {
        quote! { #krate::Marker::Completion(#krate::CompletionSource::new(#path)) }
    }));
    out
}
