//! Border projection and hole outline construction.
//!
//! Border samples are brought onto the table plane and their 2D convex hull
//! (in a frame lying in the plane) becomes the hole outline. Every hull
//! vertex keeps the grid coordinate of the border sample it came from, which
//! the removal stage rasterizes.
//!
//! Overlap holes are usually caused by an object standing on the table edge.
//! Border samples lying on that object sit well above the plane; they are
//! replaced by the point where their camera ray meets the plane before the
//! hull is built. Samples whose ray never meets the plane are dropped.
use crate::error::HoleError;
use crate::geometry::{convex_hull_2d, PlaneFrame, PlaneModel};
use crate::grid::{GridCoord, OrganizedGrid};
use log::debug;
use nalgebra::{Point2, Point3};

/// Border samples ready for hull construction, aligned with their cells.
#[derive(Clone, Debug, Default)]
pub struct HoleBorder {
    pub points: Vec<Point3<f32>>,
    pub coords: Vec<GridCoord>,
    /// Whether each sample lies inside the table polygon.
    pub inside: Vec<bool>,
    /// Samples replaced by their perspective projection.
    pub reprojected: usize,
    /// Samples dropped because no projection exists.
    pub dropped: usize,
}

impl HoleBorder {
    /// Raw border samples of an inside hole.
    pub fn raw(grid: &OrganizedGrid, border: &[GridCoord]) -> Self {
        Self {
            points: border.iter().map(|&c| *grid.at(c)).collect(),
            coords: border.to_vec(),
            inside: vec![true; border.len()],
            reprojected: 0,
            dropped: 0,
        }
    }

    /// Border samples of an overlap hole with off-plane samples re-projected.
    ///
    /// `inside` flags each border cell against the table polygon and is
    /// carried along for the edge-artifact check.
    pub fn reprojected(
        grid: &OrganizedGrid,
        plane: &PlaneModel,
        border: &[GridCoord],
        inside: &[bool],
        max_plane_dist: f32,
    ) -> Self {
        let mut out = Self {
            points: Vec::with_capacity(border.len()),
            coords: Vec::with_capacity(border.len()),
            inside: Vec::with_capacity(border.len()),
            reprojected: 0,
            dropped: 0,
        };
        for (&c, &is_inside) in border.iter().zip(inside) {
            let p = grid.at(c);
            let point = if plane.distance(p) > max_plane_dist {
                match plane.project_perspective(p) {
                    Some(q) => {
                        out.reprojected += 1;
                        q
                    }
                    None => {
                        debug!(
                            "HoleBorder::reprojected dropping ({}, {}): camera ray misses the plane",
                            c.col, c.row
                        );
                        out.dropped += 1;
                        continue;
                    }
                }
            } else {
                *p
            };
            out.points.push(point);
            out.coords.push(c);
            out.inside.push(is_inside);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Samples flagged as inside the table polygon.
    pub fn inside_points(&self) -> Vec<Point3<f32>> {
        self.points
            .iter()
            .zip(&self.inside)
            .filter(|(_, is_inside)| **is_inside)
            .map(|(p, _)| *p)
            .collect()
    }
}

/// Convex outline of a hole lying on the table plane.
#[derive(Clone, Debug)]
pub struct OutlineHull {
    /// Hull vertices projected onto the plane, counter-clockwise in the plane frame.
    pub points: Vec<Point3<f32>>,
    /// Grid cell of the border sample behind each vertex.
    pub polygon: Vec<GridCoord>,
}

/// Project `border` orthogonally onto `plane` and take its convex hull.
pub fn build_outline(
    plane: &PlaneModel,
    frame: &PlaneFrame,
    border: &HoleBorder,
) -> Result<OutlineHull, HoleError> {
    let projected: Vec<Point3<f32>> = border
        .points
        .iter()
        .map(|p| plane.project_orthogonal(p))
        .collect();
    let flat: Vec<Point2<f32>> = projected.iter().map(|p| frame.to_plane_2d(p)).collect();
    let hull = convex_hull_2d(&flat)?;
    Ok(OutlineHull {
        points: hull.iter().map(|&i| projected[i]).collect(),
        polygon: hull.iter().map(|&i| border.coords[i]).collect(),
    })
}
