#![doc = include_str!("../README.md")]

// Public modules
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod holes;
pub mod types;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{BorderTouchPolicy, HoleDetector, HoleParams};
pub use crate::error::HoleError;
pub use crate::types::{HoleDetection, HoleOutline};

// Inputs.
pub use crate::geometry::PlaneModel;
pub use crate::grid::{GridCoord, OrganizedGrid};

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use hole_detector::prelude::*;
/// use nalgebra::Point3;
///
/// # fn main() {
/// let grid = OrganizedGrid::from_fn(64, 48, |c, r| Point3::new(c as f32 * 0.01, r as f32 * 0.01, 1.0));
/// let plane = PlaneModel::new(0.0, 0.0, 1.0, -1.0);
/// let hull = [65usize, 126, 3006, 2945];
///
/// let det = HoleDetector::new(HoleParams::default());
/// let res = det.process(&grid, Some(&plane), Some(&hull)).unwrap();
/// println!("holes={} latency_ms={:.3}", res.outlines.len(), res.latency_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::{
        HoleDetection, HoleDetector, HoleError, HoleParams, OrganizedGrid, PlaneModel,
    };
}
