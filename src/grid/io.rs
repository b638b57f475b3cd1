//! I/O helpers for depth frames, removal masks and JSON.
//!
//! - `load_frame`: read a JSON frame (grid + optional plane + optional hull).
//! - `save_removal_mask`: write a grayscale PNG marking removed samples.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{is_finite_point, OrganizedGrid};
use crate::geometry::PlaneModel;
use image::{GrayImage, Luma};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const MASK_REMOVED: u8 = 255;
const MASK_INVALID: u8 = 128;
const MASK_KEPT: u8 = 0;

/// On-disk frame layout. Invalid samples are stored as `null`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FrameFile {
    pub width: usize,
    pub height: usize,
    pub points: Vec<Option<[f32; 3]>>,
    #[serde(default)]
    pub plane: Option<[f32; 4]>,
    #[serde(default)]
    pub hull_indices: Option<Vec<usize>>,
}

/// Frame decoded into detector inputs.
#[derive(Clone, Debug)]
pub struct Frame {
    pub grid: OrganizedGrid,
    pub plane: Option<PlaneModel>,
    pub hull_indices: Option<Vec<usize>>,
}

impl FrameFile {
    pub fn into_frame(self) -> Result<Frame, String> {
        let points = self
            .points
            .into_iter()
            .map(|p| match p {
                Some([x, y, z]) => Point3::new(x, y, z),
                None => Point3::new(f32::NAN, f32::NAN, f32::NAN),
            })
            .collect();
        let grid = OrganizedGrid::new(self.width, self.height, points).map_err(|e| e.to_string())?;
        Ok(Frame {
            grid,
            plane: self.plane.map(PlaneModel::from),
            hull_indices: self.hull_indices,
        })
    }

    pub fn from_frame(frame: &Frame) -> Self {
        let points = frame
            .grid
            .points()
            .iter()
            .map(|p| is_finite_point(p).then_some([p.x, p.y, p.z]))
            .collect();
        Self {
            width: frame.grid.width(),
            height: frame.grid.height(),
            points,
            plane: frame.plane.map(|p| p.coefficients()),
            hull_indices: frame.hull_indices.clone(),
        }
    }
}

/// Load a JSON frame from disk.
pub fn load_frame(path: &Path) -> Result<Frame, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read frame {}: {e}", path.display()))?;
    let file: FrameFile = serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse frame {}: {e}", path.display()))?;
    file.into_frame()
        .map_err(|e| format!("Invalid frame {}: {e}", path.display()))
}

/// Render the removal set as an 8-bit mask the size of the grid.
///
/// Removed samples are white, samples that were already invalid are gray.
pub fn removal_mask(grid: &OrganizedGrid, remove_indices: &[usize]) -> GrayImage {
    let mut out = GrayImage::new(grid.width() as u32, grid.height() as u32);
    for row in 0..grid.height() {
        for (col, p) in grid.row(row).iter().enumerate() {
            let v = if is_finite_point(p) {
                MASK_KEPT
            } else {
                MASK_INVALID
            };
            out.put_pixel(col as u32, row as u32, Luma([v]));
        }
    }
    for &idx in remove_indices {
        if idx >= grid.len() {
            continue;
        }
        let col = idx % grid.width();
        let row = idx / grid.width();
        out.put_pixel(col as u32, row as u32, Luma([MASK_REMOVED]));
    }
    out
}

/// Save the removal mask as a PNG.
pub fn save_removal_mask(
    grid: &OrganizedGrid,
    remove_indices: &[usize],
    path: &Path,
) -> Result<(), String> {
    ensure_parent_dir(path)?;
    removal_mask(grid, remove_indices)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
