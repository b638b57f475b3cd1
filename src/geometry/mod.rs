//! Geometry primitives used by the hole pipeline.
//!
//! - [`polygon`]: integer crossing-number containment and grid bounds.
//! - [`plane`]: plane distances, projections and an in-plane 2D frame.
//! - [`hull`]: 2D convex hull returning source indices.
//! - [`segment`]: point-to-segment distances for edge checks.
pub mod hull;
pub mod plane;
pub mod polygon;
pub mod segment;

pub use hull::convex_hull_2d;
pub use plane::{PlaneFrame, PlaneModel};
pub use polygon::{point_in_polygon, GridBounds};
pub use segment::{closed_polyline_edges, min_distance_to_edges, point_segment_distance};
