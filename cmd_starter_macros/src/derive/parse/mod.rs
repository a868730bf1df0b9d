//! Parsing of `#[starter(...)]` attributes and struct fields.

use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Data, DeriveInput, Expr, Fields, Lit, Meta, Type};

mod literals;
mod type_utils;

use literals::{lit_str, path_value};
pub(crate) use type_utils::{option_inner, plain_ident, vec_inner};

/// Struct-level attributes.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    pub global: bool,
    pub namespace: Option<String>,
    pub rename: Option<String>,
    /// Overrides the generated crate path for dependency aliasing.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes.
///
/// Doc comments are collected into `docs` and only used when no explicit
/// `description` is given.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub required: bool,
    pub hidden: bool,
    pub skip: bool,
    pub aliases: Vec<String>,
    pub descriptions: Vec<String>,
    pub completions: Vec<syn::Path>,
    pub docs: Vec<String>,
}

impl FieldAttrs {
    /// Description fragments in declaration order.
    ///
    /// Doc comment lines are joined into a single fragment.
    pub(crate) fn description_fragments(&self) -> Vec<String> {
        if !self.descriptions.is_empty() {
            return self.descriptions.clone();
        }
        let joined = self
            .docs
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if joined.is_empty() {
            Vec::new()
        } else {
            vec![joined]
        }
    }
}

pub(crate) struct ParsedField {
    pub name: String,
    pub ty: Type,
    pub attrs: FieldAttrs,
}

pub(crate) struct ParsedInput {
    pub ident: syn::Ident,
    pub generics: syn::Generics,
    pub attrs: StructAttrs,
    pub fields: Vec<ParsedField>,
}

/// Iterate all `#[starter(...)]` attributes once and apply a callback.
fn parse_starter<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("starter")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn unknown(meta: &ParseNestedMeta, expected: &str) -> syn::Error {
    let key = meta
        .path
        .get_ident()
        .map_or_else(|| "?".to_owned(), ToString::to_string);
    meta.error(format!("unknown starter attribute '{key}'; expected one of {expected}"))
}

pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_starter(attrs, |meta| {
        if meta.path.is_ident("global") {
            out.global = true;
        } else if meta.path.is_ident("namespace") {
            out.namespace = Some(lit_str(meta, "namespace")?.value());
        } else if meta.path.is_ident("rename") {
            out.rename = Some(lit_str(meta, "rename")?.value());
        } else if meta.path.is_ident("crate") {
            out.crate_path = Some(path_value(meta, "crate")?);
        } else {
            return Err(unknown(meta, "global, namespace, rename, crate"));
        }
        Ok(())
    })?;
    Ok(out)
}

pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs {
        docs: doc_lines(attrs),
        ..FieldAttrs::default()
    };
    parse_starter(attrs, |meta| {
        if meta.path.is_ident("required") {
            out.required = true;
        } else if meta.path.is_ident("hidden") {
            out.hidden = true;
        } else if meta.path.is_ident("skip") {
            out.skip = true;
        } else if meta.path.is_ident("alias") {
            out.aliases.push(lit_str(meta, "alias")?.value());
        } else if meta.path.is_ident("description") {
            out.descriptions.push(lit_str(meta, "description")?.value());
        } else if meta.path.is_ident("complete") {
            out.completions.push(path_value(meta, "complete")?);
        } else {
            return Err(unknown(
                meta,
                "required, hidden, skip, alias, description, complete",
            ));
        }
        Ok(())
    })?;
    Ok(out)
}

fn doc_lines(attrs: &[Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(expr) => match &expr.lit {
                    Lit::Str(s) => Some(s.value()),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        })
        .collect()
}

/// Validates the derive input and collects its attributes.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedInput> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Reflect can only be derived for structs",
        ));
    };
    let fields = match &data.fields {
        Fields::Named(named) => &named.named,
        Fields::Unit => {
            return Ok(ParsedInput {
                ident: input.ident.clone(),
                generics: input.generics.clone(),
                attrs: parse_struct_attrs(&input.attrs)?,
                fields: Vec::new(),
            });
        }
        Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                data.struct_token,
                "Reflect requires named fields",
            ));
        }
    };

    let mut parsed = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = &field.ident else {
            continue;
        };
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        parsed.push(ParsedField {
            name: ident.unraw().to_string(),
            ty: field.ty.clone(),
            attrs,
        });
    }

    Ok(ParsedInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        attrs: parse_struct_attrs(&input.attrs)?,
        fields: parsed,
    })
}
