//! Namespace and class inclusion filters.

use serde::{Deserialize, Serialize};

use crate::meta::{TypeInfo, TypeRef};

/// Prefix-based inclusion rules applied to discovered types.
///
/// An empty list places no restriction of that kind. Both lists can be read
/// from an application's configuration file:
///
/// ```rust
/// use cmd_starter::InclusionFilter;
///
/// let filter: InclusionFilter =
///     serde_json::from_str(r#"{ "namespaces": ["app::opts"] }"#).unwrap();
/// assert_eq!(filter, InclusionFilter::new().namespace("app::opts"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct InclusionFilter {
    /// Accepted namespace prefixes.
    pub namespaces: Vec<String>,
    /// Accepted fully-qualified class name prefixes.
    pub classes: Vec<String>,
}

impl InclusionFilter {
    /// Creates an unrestricted filter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            namespaces: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// Adds a namespace prefix.
    #[must_use]
    pub fn namespace(mut self, prefix: impl Into<String>) -> Self {
        self.namespaces.push(prefix.into());
        self
    }

    /// Adds a fully-qualified class name prefix.
    #[must_use]
    pub fn class(mut self, prefix: impl Into<String>) -> Self {
        self.classes.push(prefix.into());
        self
    }

    /// Whether the filter accepts every type.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.namespaces.is_empty() && self.classes.is_empty()
    }

    /// Whether `info` passes both stages.
    #[must_use]
    pub fn matches(&self, info: &TypeInfo) -> bool {
        matches_any(&self.namespaces, info.namespace())
            && matches_any(&self.classes, &info.full_name())
    }

    /// Keeps the candidates that pass both stages, preserving their order.
    #[must_use]
    pub fn apply<'a, I>(&self, candidates: I) -> Vec<TypeRef>
    where
        I: IntoIterator<Item = &'a TypeRef>,
    {
        filter_types(candidates, &self.namespaces, &self.classes)
    }
}

/// Stable two-stage prefix filter.
///
/// Stage one keeps types whose namespace starts with any of `namespaces`;
/// stage two keeps types whose full name starts with any of `classes`. An
/// empty pattern list passes every type.
#[must_use]
pub fn filter_types<'a, I, S>(candidates: I, namespaces: &[S], classes: &[S]) -> Vec<TypeRef>
where
    I: IntoIterator<Item = &'a TypeRef>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .filter(|info| matches_any(namespaces, info.namespace()))
        .filter(|info| matches_any(classes, &info.full_name()))
        .cloned()
        .collect()
}

fn matches_any<S: AsRef<str>>(patterns: &[S], value: &str) -> bool {
    patterns.is_empty()
        || patterns
            .iter()
            .any(|pattern| value.starts_with(pattern.as_ref()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn candidates() -> Vec<TypeRef> {
        vec![
            Arc::new(TypeInfo::new("App.Commands", "Foo")),
            Arc::new(TypeInfo::new("App.Other", "Bar")),
            Arc::new(TypeInfo::new("App.Commands.Deploy", "Baz")),
        ]
    }

    fn names(types: &[TypeRef]) -> Vec<&str> {
        types.iter().map(|info| info.name()).collect()
    }

    #[rstest]
    fn unrestricted_filter_keeps_everything(candidates: Vec<TypeRef>) {
        let kept = InclusionFilter::new().apply(&candidates);
        assert_eq!(names(&kept), ["Foo", "Bar", "Baz"]);
    }

    #[rstest]
    fn namespace_prefix_keeps_matching_types(candidates: Vec<TypeRef>) {
        let kept = InclusionFilter::new().namespace("App.Commands").apply(&candidates);
        assert_eq!(names(&kept), ["Foo", "Baz"]);
    }

    #[rstest]
    fn stages_intersect(candidates: Vec<TypeRef>) {
        let kept = InclusionFilter::new()
            .namespace("App")
            .class("App.Other::Bar")
            .apply(&candidates);
        assert_eq!(names(&kept), ["Bar"]);
    }

    #[rstest]
    fn order_follows_input(candidates: Vec<TypeRef>) {
        let kept = filter_types(&candidates, &["App.Commands.Deploy", "App.Commands"], &[]);
        assert_eq!(names(&kept), ["Foo", "Baz"]);
    }

    #[rstest]
    fn no_wildcards(candidates: Vec<TypeRef>) {
        let kept = InclusionFilter::new().namespace("App.*").apply(&candidates);
        assert!(kept.is_empty());
    }
}
