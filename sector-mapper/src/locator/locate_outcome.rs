use crate::layer::MarkerHandle;
use geo::Point;

/// how a locate request was resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum LocateOutcome {
    /// marker found in the flat layer
    Flat { handle: MarkerHandle },
    /// marker found in the clustering layer and revealed
    Clustered {
        handle: MarkerHandle,
        /// zoom the view was moved to in order to show the marker
        reveal_zoom: u8,
        /// true when the marker never leaves its cluster and is shown spiderfied
        spiderfied: bool,
    },
    /// no tagged marker, but a marker sits at the entity's coordinates
    Approximate { handle: MarkerHandle },
    /// no marker at all; the view was moved to the stored position
    PositionOnly { position: Point<f64> },
    NotFound,
}

impl LocateOutcome {
    pub fn is_found(&self) -> bool {
        !matches!(self, LocateOutcome::NotFound)
    }

    /// handle of the marker whose popup was opened, if any.
    pub fn handle(&self) -> Option<MarkerHandle> {
        match self {
            LocateOutcome::Flat { handle }
            | LocateOutcome::Clustered { handle, .. }
            | LocateOutcome::Approximate { handle } => Some(*handle),
            _ => None,
        }
    }
}
