//! Hole filters rejecting sensing artifacts.
//!
//! - Plane alignment: a genuine gap in the table surface is surrounded by
//!   table samples, so its border must sit on the fitted plane. Inside holes
//!   average over the whole border; overlap holes only over the border part
//!   that lies inside the table polygon.
//! - Edge artifact: overlapping holes whose inner border stays close to the
//!   table hull edges are depth dropouts along the table boundary.
use crate::geometry::{min_distance_to_edges, point_in_polygon, PlaneModel};
use crate::grid::{GridCoord, OrganizedGrid};
use nalgebra::Point3;

/// Mean distance to the plane over the selected border samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneAlignment {
    pub mean_distance: f32,
    pub samples: usize,
}

impl PlaneAlignment {
    pub fn passes(&self, threshold: f32) -> bool {
        self.mean_distance <= threshold
    }
}

fn mean_plane_distance<'a>(
    plane: &PlaneModel,
    points: impl Iterator<Item = &'a Point3<f32>>,
) -> Option<PlaneAlignment> {
    let mut sum = 0.0f64;
    let mut samples = 0usize;
    for p in points {
        sum += plane.distance(p) as f64;
        samples += 1;
    }
    if samples == 0 {
        return None;
    }
    Some(PlaneAlignment {
        mean_distance: (sum / samples as f64) as f32,
        samples,
    })
}

/// Plane alignment over every border sample of an inside hole.
///
/// `border` lists each finite neighbour of the hole once, so a sample touching
/// several interior cells weighs the same as any other border sample.
pub fn inside_plane_alignment(
    grid: &OrganizedGrid,
    plane: &PlaneModel,
    border: &[GridCoord],
) -> Option<PlaneAlignment> {
    mean_plane_distance(plane, border.iter().map(|&c| grid.at(c)))
}

/// Flags the border samples of a hole that lie inside the table polygon.
pub fn border_inside_flags(border: &[GridCoord], table_polygon: &[GridCoord]) -> Vec<bool> {
    border
        .iter()
        .map(|&c| point_in_polygon(table_polygon, c))
        .collect()
}

/// Plane alignment over the border samples flagged as inside the table.
///
/// Returns `None` when no border sample is inside.
pub fn overlap_plane_alignment(
    grid: &OrganizedGrid,
    plane: &PlaneModel,
    border: &[GridCoord],
    inside: &[bool],
) -> Option<PlaneAlignment> {
    mean_plane_distance(
        plane,
        border
            .iter()
            .zip(inside)
            .filter(|(_, is_inside)| **is_inside)
            .map(|(&c, _)| grid.at(c)),
    )
}

/// Largest distance from any of `points` to its closest table hull edge.
///
/// Returns `None` without points. Without edges every point is
/// `f32::MAX` away, so the check cannot reject the hole.
pub fn max_min_edge_distance(
    points: &[Point3<f32>],
    table_edges: &[(Point3<f32>, Point3<f32>)],
) -> Option<f32> {
    points
        .iter()
        .map(|p| min_distance_to_edges(table_edges, p))
        .fold(None, |acc: Option<f32>, d| Some(acc.map_or(d, |m| m.max(d))))
}
