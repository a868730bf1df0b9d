//! Marker providers that fail for selected kinds.

use cmd_starter::{BoxError, Marker, MarkerKind, MarkerProvider};

/// Serves `markers` but fails every lookup of a kind listed in `failing`.
#[derive(Debug, Clone, Default)]
pub struct FailingMarkers {
    markers: Vec<Marker>,
    failing: Vec<MarkerKind>,
}

impl FailingMarkers {
    /// Serves `markers` and fails for each kind in `failing`.
    #[must_use]
    pub fn new(markers: Vec<Marker>, failing: impl IntoIterator<Item = MarkerKind>) -> Self {
        Self {
            markers,
            failing: failing.into_iter().collect(),
        }
    }

    /// Fails every lookup.
    #[must_use]
    pub fn always() -> Self {
        Self::new(
            Vec::new(),
            [
                MarkerKind::Required,
                MarkerKind::Hidden,
                MarkerKind::Alias,
                MarkerKind::Description,
                MarkerKind::Completion,
            ],
        )
    }
}

impl MarkerProvider for FailingMarkers {
    fn markers(&self, kind: MarkerKind) -> Result<Vec<Marker>, BoxError> {
        if self.failing.contains(&kind) {
            return Err(format!("cannot read {kind:?} markers").into());
        }
        self.markers.markers(kind)
    }
}
