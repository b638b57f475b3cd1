//! Organized depth grids and their coordinate utilities.
pub mod io;
pub mod organized;

pub use self::organized::{is_finite_point, GridCoord, OrganizedGrid};
