use crate::detector::HoleParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `hole_scan` tool.
#[derive(Debug, Deserialize)]
pub struct ScanToolConfig {
    /// Frame JSON to process.
    pub input: PathBuf,
    #[serde(default)]
    pub params: HoleParams,
    pub output: ScanOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct ScanOutputConfig {
    pub report_json: PathBuf,
    /// Optional PNG mask of the removed samples.
    #[serde(default)]
    pub mask_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ScanToolConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
