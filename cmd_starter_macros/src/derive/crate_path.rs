//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[starter(crate = "...")]` attribute value into the
//! tokens generated code uses in place of `::cmd_starter`.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed struct attribute.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::cmd_starter }, |path| quote! { #path })
}

#[cfg(test)]
mod tests {
    #![expect(clippy::expect_used, reason = "test inputs are valid paths")]

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default(None, ":: cmd_starter")]
    #[case::custom(Some("starter"), "starter")]
    #[case::nested(Some("deps::cmd_starter"), "deps :: cmd_starter")]
    fn resolve_produces_expected_tokens(#[case] input: Option<&str>, #[case] expected: &str) {
        let parsed = input.map(|s| syn::parse_str::<syn::Path>(s).expect("valid path"));
        let tokens = resolve(parsed.as_ref());
        assert_eq!(tokens.to_string(), expected);
    }
}
