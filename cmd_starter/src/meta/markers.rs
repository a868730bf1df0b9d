//! Declarative markers attached to properties and parameters.

use std::fmt;
use std::sync::Arc;

use crate::BoxError;

/// Discriminant of a [`Marker`], used to query a [`MarkerProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// The option must be supplied.
    Required,
    /// The option or argument is omitted from help output.
    Hidden,
    /// Alternative flag names.
    Alias,
    /// Help text fragment.
    Description,
    /// Shell completion provider.
    Completion,
}

/// A single piece of declarative metadata.
#[derive(Debug, Clone)]
pub enum Marker {
    /// See [`MarkerKind::Required`].
    Required,
    /// See [`MarkerKind::Hidden`].
    Hidden,
    /// See [`MarkerKind::Alias`].
    Alias(Vec<String>),
    /// See [`MarkerKind::Description`].
    Description(String),
    /// See [`MarkerKind::Completion`].
    Completion(CompletionSource),
}

impl Marker {
    /// Builds an alias marker from any list of names.
    #[must_use]
    pub fn alias<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Alias(aliases.into_iter().map(Into::into).collect())
    }

    /// Builds a description marker.
    #[must_use]
    pub fn description(text: impl Into<String>) -> Self {
        Self::Description(text.into())
    }

    /// Returns the marker's discriminant.
    #[must_use]
    pub const fn kind(&self) -> MarkerKind {
        match self {
            Self::Required => MarkerKind::Required,
            Self::Hidden => MarkerKind::Hidden,
            Self::Alias(_) => MarkerKind::Alias,
            Self::Description(_) => MarkerKind::Description,
            Self::Completion(_) => MarkerKind::Completion,
        }
    }
}

/// Resolves the markers of one property or parameter.
///
/// Each kind is looked up independently and may fail independently. Callers
/// in this crate treat every failure as "no markers of that kind".
pub trait MarkerProvider: Send + Sync {
    /// Returns every marker of `kind` in declaration order.
    ///
    /// # Errors
    ///
    /// Returns the provider's failure when the markers cannot be read.
    fn markers(&self, kind: MarkerKind) -> Result<Vec<Marker>, BoxError>;
}

impl MarkerProvider for Vec<Marker> {
    fn markers(&self, kind: MarkerKind) -> Result<Vec<Marker>, BoxError> {
        Ok(self
            .iter()
            .filter(|marker| marker.kind() == kind)
            .cloned()
            .collect())
    }
}

/// Shared handle to a [`MarkerProvider`].
#[derive(Clone)]
pub struct Markers(Arc<dyn MarkerProvider>);

impl Markers {
    /// Wraps an arbitrary provider.
    #[must_use]
    pub fn new(provider: impl MarkerProvider + 'static) -> Self {
        Self(Arc::new(provider))
    }

    /// Looks up every marker of `kind`.
    ///
    /// # Errors
    ///
    /// Propagates the provider's failure unchanged.
    pub fn lookup(&self, kind: MarkerKind) -> Result<Vec<Marker>, BoxError> {
        self.0.markers(kind)
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<Marker>> for Markers {
    fn from(markers: Vec<Marker>) -> Self {
        Self::new(markers)
    }
}

impl fmt::Debug for Markers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Markers(<provider>)")
    }
}

type CompletionFn = dyn Fn(&str) -> Vec<String> + Send + Sync;

/// Source of shell completion candidates for an option or argument.
#[derive(Clone)]
pub struct CompletionSource(Arc<CompletionFn>);

impl CompletionSource {
    /// Wraps a function returning candidates for the word being completed.
    #[must_use]
    pub fn new<F>(complete: F) -> Self
    where
        F: Fn(&str) -> Vec<String> + Send + Sync + 'static,
    {
        Self(Arc::new(complete))
    }

    /// Offers a fixed list of values, filtered by prefix.
    #[must_use]
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        Self::new(move |prefix| {
            values
                .iter()
                .filter(|value| value.starts_with(prefix))
                .cloned()
                .collect()
        })
    }

    /// Returns the candidates for `prefix`.
    #[must_use]
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        (self.0)(prefix)
    }
}

impl fmt::Debug for CompletionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CompletionSource(<fn>)")
    }
}
