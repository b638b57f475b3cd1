use crate::holes::{Containment, HoleClass};
use serde::{Deserialize, Serialize};

/// Identifier of a hole in discovery order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HoleId(pub u32);

/// Final verdict for a hole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HoleDecision {
    /// Reported as an outline.
    Accepted,
    /// Mostly outside the table hull.
    Outside,
    /// Border does not follow the table plane.
    OffPlane,
    /// Overlap hole without any border sample inside the table hull.
    NoInsideBorder,
    /// Overlap hole hugging the table hull edges.
    EdgeArtifact,
    /// Border too small or collinear for an outline.
    Degenerate,
    /// Outline reaches the image edge.
    TouchesBorder,
}

/// Per-hole record kept in the pipeline trace.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleSample {
    pub id: HoleId,
    pub class: HoleClass,
    pub interior_size: usize,
    pub border_size: usize,
    pub containment: Containment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_plane_distance: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_distance: Option<f32>,
    pub reprojected_border: usize,
    pub dropped_border: usize,
    pub removed_samples: usize,
    pub decision: HoleDecision,
}

impl HoleSample {
    pub fn new(id: HoleId, class: HoleClass, containment: Containment) -> Self {
        Self {
            id,
            class,
            interior_size: containment.inside + containment.outside,
            border_size: 0,
            containment,
            mean_plane_distance: None,
            edge_distance: None,
            reprojected_border: 0,
            dropped_border: 0,
            removed_samples: 0,
            decision: HoleDecision::Accepted,
        }
    }
}

/// Per-class tallies of the scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassCounts {
    pub inside: usize,
    pub overlap: usize,
    pub outside: usize,
}

impl ClassCounts {
    pub fn record(&mut self, class: HoleClass) {
        match class {
            HoleClass::Inside => self.inside += 1,
            HoleClass::Overlap => self.overlap += 1,
            HoleClass::Outside => self.outside += 1,
        }
    }
}

/// Summary of the seed scan and classification.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleScanStage {
    pub elapsed_ms: f64,
    pub holes: usize,
    pub too_small: usize,
    pub classes: ClassCounts,
}
