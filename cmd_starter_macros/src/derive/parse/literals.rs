//! Literal parsing helpers for `#[starter(...)]` attributes.

use syn::meta::ParseNestedMeta;
use syn::{Lit, LitStr};

/// Parses a string literal assigned to `key`.
pub(crate) fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    let literal = meta.value()?.parse::<Lit>()?;
    match literal {
        Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(other.span(), format!("{key} must be a string"))),
    }
}

/// Parses a path assigned to `key`, accepting either `key = path` or
/// `key = "path"`.
pub(crate) fn path_value(meta: &ParseNestedMeta, key: &str) -> syn::Result<syn::Path> {
    let value = meta.value()?;
    if value.peek(LitStr) {
        let literal = value.parse::<LitStr>()?;
        return literal
            .parse()
            .map_err(|_| syn::Error::new(literal.span(), format!("{key} must name a path")));
    }
    value.parse()
}
