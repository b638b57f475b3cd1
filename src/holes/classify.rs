use super::Hole;
use crate::geometry::point_in_polygon;
use crate::grid::GridCoord;
use serde::{Deserialize, Serialize};

/// Position of a hole relative to the table hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleClass {
    /// Every interior cell lies inside the table polygon.
    Inside,
    /// Partially inside; outside cells stay within `inside × factor`.
    Overlap,
    /// Mostly outside the table; discarded.
    Outside,
}

/// Interior cells counted against the table polygon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Containment {
    pub inside: usize,
    pub outside: usize,
}

pub fn count_containment(coords: &[GridCoord], polygon: &[GridCoord]) -> Containment {
    let inside = coords
        .iter()
        .filter(|&&c| point_in_polygon(polygon, c))
        .count();
    Containment {
        inside,
        outside: coords.len() - inside,
    }
}

pub fn classify_counts(counts: Containment, inside_out_factor: f32) -> HoleClass {
    if counts.outside == 0 {
        HoleClass::Inside
    } else if counts.outside as f32 > counts.inside as f32 * inside_out_factor {
        HoleClass::Outside
    } else {
        HoleClass::Overlap
    }
}

pub fn classify_hole(
    hole: &Hole,
    table_polygon: &[GridCoord],
    inside_out_factor: f32,
) -> (HoleClass, Containment) {
    let counts = count_containment(&hole.interior, table_polygon);
    (classify_counts(counts, inside_out_factor), counts)
}
