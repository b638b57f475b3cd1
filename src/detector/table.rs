//! Table hull prepared for a frame.
//!
//! The upstream segmentation hands over the hull as grid indices. The
//! detector needs it three ways: as a grid polygon for containment tests, as
//! that polygon's bounding box for the seed scan, and as 3D edges for the
//! edge-distance check. Edges touching a vertex without depth are left out.
use crate::error::HoleError;
use crate::geometry::{closed_polyline_edges, GridBounds};
use crate::grid::{is_finite_point, GridCoord, OrganizedGrid};
use log::{debug, warn};
use nalgebra::Point3;

#[derive(Clone, Debug)]
pub struct TableHull {
    pub polygon: Vec<GridCoord>,
    pub bounds: GridBounds,
    /// Hull edges between consecutive vertices that both have depth.
    pub edges: Vec<(Point3<f32>, Point3<f32>)>,
}

impl TableHull {
    /// Resolve hull indices against `grid`.
    ///
    /// Indices that do not map to a grid cell are skipped. Fails with
    /// `MissingInput` when fewer than three indices remain.
    pub fn from_indices(grid: &OrganizedGrid, indices: &[usize]) -> Result<Self, HoleError> {
        let mut polygon = Vec::with_capacity(indices.len());
        let mut corners = Vec::with_capacity(indices.len());
        for &idx in indices {
            match grid.to_coords(idx) {
                Ok(c) => {
                    polygon.push(c);
                    let p = grid.at(c);
                    if is_finite_point(p) {
                        corners.push(Some(*p));
                    } else {
                        debug!("TableHull::from_indices hull vertex {} has no depth", idx);
                        corners.push(None);
                    }
                }
                Err(err) => warn!("TableHull::from_indices skipping index {}: {}", idx, err),
            }
        }
        if polygon.len() < 3 {
            return Err(HoleError::MissingInput {
                what: "table hull needs at least three valid grid indices",
            });
        }
        let bounds = GridBounds::from_coords(&polygon, grid.width(), grid.height());
        Ok(Self {
            polygon,
            bounds,
            edges: closed_polyline_edges(&corners),
        })
    }
}
