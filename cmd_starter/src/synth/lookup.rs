//! Fail-safe marker reads.
//!
//! A failing lookup degrades only the affected field to its empty default.
//! These reads never consult the guard's error handling mode.

use tracing::debug;

use super::naming::DESCRIPTION_JOINER;
use crate::meta::{CompletionSource, Marker, MarkerKind, Markers};

fn read(markers: &Markers, kind: MarkerKind, member: &str) -> Vec<Marker> {
    markers.lookup(kind).unwrap_or_else(|err| {
        debug!(member, ?kind, error = %err, "marker lookup failed; using empty default");
        Vec::new()
    })
}

pub(crate) fn has_marker(markers: &Markers, kind: MarkerKind, member: &str) -> bool {
    !read(markers, kind, member).is_empty()
}

pub(crate) fn description(markers: &Markers, member: &str) -> String {
    read(markers, MarkerKind::Description, member)
        .into_iter()
        .filter_map(|marker| match marker {
            Marker::Description(text) => Some(text),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(DESCRIPTION_JOINER)
}

pub(crate) fn aliases(markers: &Markers, member: &str) -> Vec<String> {
    read(markers, MarkerKind::Alias, member)
        .into_iter()
        .flat_map(|marker| match marker {
            Marker::Alias(aliases) => aliases,
            _ => Vec::new(),
        })
        .collect()
}

pub(crate) fn completions(markers: &Markers, member: &str) -> Vec<CompletionSource> {
    read(markers, MarkerKind::Completion, member)
        .into_iter()
        .filter_map(|marker| match marker {
            Marker::Completion(source) => Some(source),
            _ => None,
        })
        .collect()
}
