use crate::diagnostics::{HoleSample, HoleScanStage, TimingBreakdown};
use crate::types::HoleDetection;
use serde::Serialize;

/// Result produced by [`HoleDetector::process_with_diagnostics`](crate::HoleDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub detection: HoleDetection,
    pub trace: PipelineTrace,
}

impl DetectionReport {
    /// Samples of holes that ended with `decision`.
    pub fn holes_with(&self, decision: crate::diagnostics::HoleDecision) -> Vec<&HoleSample> {
        self.trace
            .holes
            .iter()
            .filter(|h| h.decision == decision)
            .collect()
    }
}

/// End-to-end trace describing the internal execution of the detector.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub scan: HoleScanStage,
    pub holes: Vec<HoleSample>,
    /// Removal indices collected before canonicalization.
    pub raw_remove_count: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub invalid_samples: usize,
    pub table_hull_vertices: usize,
}
