use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::{MarkerColor, MarkerSet};

/// Fused 3-D position of one marker.
///
/// `Occluded` replaces the `(-1, -1, -1)` sentinel of the transport format,
/// so downstream code can tell a real coordinate from "undetermined".
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerPoint3D {
    Resolved(Point3<f64>),
    #[default]
    Occluded,
}

impl MarkerPoint3D {
    /// Wire value for an occluded marker.
    pub const SENTINEL: [f64; 3] = [-1.0, -1.0, -1.0];

    pub fn resolved(x: f64, y: f64, z: f64) -> Self {
        Self::Resolved(Point3::new(x, y, z))
    }

    pub fn point(&self) -> Option<&Point3<f64>> {
        match self {
            Self::Resolved(p) => Some(p),
            Self::Occluded => None,
        }
    }

    pub fn is_occluded(&self) -> bool {
        matches!(self, Self::Occluded)
    }

    /// Coordinates as an array, with [`Self::SENTINEL`] for occluded markers.
    pub fn to_array_or_sentinel(&self) -> [f64; 3] {
        match self {
            Self::Resolved(p) => [p.x, p.y, p.z],
            Self::Occluded => Self::SENTINEL,
        }
    }
}

/// Fused points of all four markers for one trigger.
pub type FusedMarkers = MarkerSet<MarkerPoint3D>;

impl MarkerSet<MarkerPoint3D> {
    /// Colors whose fused point is undetermined, origin first.
    pub fn occluded(&self) -> Vec<MarkerColor> {
        self.iter()
            .filter(|(_, p)| p.is_occluded())
            .map(|(c, _)| c)
            .collect()
    }
}
