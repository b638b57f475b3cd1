//! Error taxonomy shared by the grid utilities and the detector.
//!
//! Only [`HoleError::MissingInput`] is fatal for a frame. The remaining
//! variants are reported by helpers and handled by their callers, which skip
//! the offending element (coordinate, point or hole) and keep going.

/// Errors raised while addressing the grid or processing holes.
#[derive(Clone, Debug, PartialEq)]
pub enum HoleError {
    /// 2D coordinate outside `[0, width) × [0, height)`.
    InvalidCoordinate {
        col: usize,
        row: usize,
        width: usize,
        height: usize,
    },
    /// Linear index outside the sample buffer.
    InvalidIndex { index: usize, len: usize },
    /// 2D addressing requested on a single-row (unorganized) grid.
    NotOrganized { width: usize, height: usize },
    /// Geometry too small or collinear to form a polygon.
    DegenerateGeometry { reason: &'static str },
    /// A required per-frame input is absent or unusable.
    MissingInput { what: &'static str },
    /// Sample buffer length does not match the declared dimensions.
    GridSize { expected: usize, got: usize },
}

impl std::fmt::Display for HoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HoleError::InvalidCoordinate {
                col,
                row,
                width,
                height,
            } => write!(
                f,
                "2D coordinates ({col}, {row}) outside of grid dimension {width}x{height}"
            ),
            HoleError::InvalidIndex { index, len } => {
                write!(f, "point index {index} invalid for grid of {len} samples")
            }
            HoleError::NotOrganized { width, height } => write!(
                f,
                "grid {width}x{height} is not organized, 2D addressing unavailable"
            ),
            HoleError::DegenerateGeometry { reason } => {
                write!(f, "degenerate geometry: {reason}")
            }
            HoleError::MissingInput { what } => write!(f, "missing input: {what}"),
            HoleError::GridSize { expected, got } => {
                write!(f, "grid expects {expected} samples, got {got}")
            }
        }
    }
}

impl std::error::Error for HoleError {}
