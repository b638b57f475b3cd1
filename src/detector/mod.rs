//! Hole detector for table-top depth grids.
//!
//! Overview
//! - Resolves the table hull indices handed over by plane segmentation into
//!   a grid polygon and scans its bounding box for 4-connected components of
//!   invalid samples (see [`crate::holes`]).
//! - Classifies each component as inside, overlapping or outside the table
//!   polygon; outside components are ignored.
//! - Rejects components whose border does not follow the table plane, and
//!   overlapping components that hug the table hull edges.
//! - Projects the border of every surviving hole onto the plane, takes its
//!   convex hull as the outline and rasterizes that outline into the grid
//!   indices to remove.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and CLI.
//! - `pipeline` – the main [`HoleDetector`] implementation.
//! - [`filters`] – plane-alignment and edge-artifact checks.
//! - [`outline`] – border projection and convex outline construction.
//! - [`removal`] – outline rasterization into removal indices.
//! - `table` – table hull resolution.

pub mod filters;
pub mod outline;
pub mod params;
mod pipeline;
pub mod removal;
mod table;

pub use params::{BorderTouchPolicy, HoleParams};
pub use pipeline::HoleDetector;
pub use table::TableHull;
