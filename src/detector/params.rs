//! Parameter types configuring the hole detector stages.
//!
//! The knobs cover hole size, the inside/outside split against the table
//! hull, plane alignment of hole borders, and the table-edge artifact check.
//!
//! Defaults suit a tabletop roughly one metre from a structured-light or
//! time-of-flight sensor with coordinates in metres. Start tuning with
//! `plane_dist_threshold` when the plane fit is noisy.

use serde::{Deserialize, Serialize};

/// Detector-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoleParams {
    /// Minimal number of connected invalid samples forming a hole (exclusive).
    pub min_hole_size: usize,
    /// A hole is outside the table when `#outside > #inside * inside_out_factor`.
    pub inside_out_factor: f32,
    /// Mean border distance to the plane tolerated for inside holes (metres).
    /// Overlap holes use three times this value; border points farther than
    /// twice this value are re-projected onto the plane.
    pub plane_dist_threshold: f32,
    /// Minimal distance the deepest border point of an overlapping hole must
    /// keep from the table hull edges (metres).
    pub min_distance_to_convex_hull: f32,
    /// What happens to the removal indices of holes touching the image edge.
    pub border_touch_policy: BorderTouchPolicy,
}

impl Default for HoleParams {
    fn default() -> Self {
        Self {
            min_hole_size: 15,
            inside_out_factor: 2.0,
            plane_dist_threshold: 0.02,
            min_distance_to_convex_hull: 0.05,
            border_touch_policy: BorderTouchPolicy::default(),
        }
    }
}

impl HoleParams {
    /// Mean plane distance tolerated for the inside-hull part of overlap holes.
    pub fn overlap_plane_dist_threshold(&self) -> f32 {
        self.plane_dist_threshold * 3.0
    }

    /// Border points farther than this from the plane are re-projected.
    pub fn reproject_dist_threshold(&self) -> f32 {
        self.plane_dist_threshold * 2.0
    }
}

/// Handling of holes whose outline reaches the image edge.
///
/// Such outlines are never reported, since the gap is likely sensor
/// truncation. The policy decides whether the samples enclosed by the
/// outline are still blanked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderTouchPolicy {
    /// Keep the enclosed samples in the removal set.
    #[default]
    KeepIndices,
    /// Leave the enclosed samples untouched.
    DropIndices,
}
