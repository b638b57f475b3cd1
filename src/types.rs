use crate::grid::GridCoord;
use crate::holes::HoleClass;
use nalgebra::Point3;
use serde::Serialize;

/// Outline of one accepted hole.
#[derive(Clone, Debug, Serialize)]
pub struct HoleOutline {
    pub class: HoleClass,
    /// Convex hull vertices on the table plane, in the sensor frame.
    pub points: Vec<Point3<f32>>,
    /// Grid cell behind each hull vertex.
    pub polygon: Vec<GridCoord>,
    pub interior_size: usize,
    pub border_size: usize,
}

/// Per-frame detector output.
#[derive(Clone, Debug, Default, Serialize)]
pub struct HoleDetection {
    pub outlines: Vec<HoleOutline>,
    /// Strictly increasing linear indices of samples to blank.
    pub remove_indices: Vec<usize>,
    pub latency_ms: f64,
}
