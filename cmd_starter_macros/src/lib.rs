//! Procedural macros for `cmd_starter`.
//!
//! `#[derive(Reflect)]` describes a struct with named fields as a
//! `cmd_starter::TypeInfo`: one property per field, with markers taken from
//! `#[starter(...)]` attributes and doc comments.
//!
//! Option structs usually keep their fields private, so visibility does not
//! decide what is described. Every named field becomes a property unless it
//! carries `#[starter(skip)]`.
//!
//! Struct attributes:
//!
//! - `global` records the global options container capability and implements
//!   `cmd_starter::GlobalOptionsContainer`.
//! - `namespace = "..."` overrides the namespace, which defaults to the
//!   declaring module path.
//! - `rename = "..."` overrides the type name.
//! - `crate = "..."` changes the path generated code uses to reach
//!   `cmd_starter`.
//!
//! Field attributes: `required`, `hidden`, `alias = "..."` (repeatable),
//! `description = "..."` (repeatable, replaces doc comments),
//! `complete = path::to::fn` and `skip`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `cmd_starter::Reflect`.
#[proc_macro_derive(Reflect, attributes(starter))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
