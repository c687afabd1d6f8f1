//! JSON configuration of the `mondrian_grid` tool.

use crate::builder::GridBuilderParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct GridToolConfig {
    /// Edge mask image.
    pub input: PathBuf,
    /// Mask values at or above this are edge pixels.
    #[serde(default = "default_mask_threshold")]
    pub mask_threshold: u8,
    /// Optional point whose enclosing cell is reported.
    #[serde(default)]
    pub target: Option<[f32; 2]>,
    #[serde(default)]
    pub params: GridBuilderParams,
    pub output: GridOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct GridOutputConfig {
    #[serde(rename = "arrangement_json")]
    pub arrangement_json: PathBuf,
    /// Include the full build trace in the JSON output.
    #[serde(default)]
    pub include_trace: bool,
}

fn default_mask_threshold() -> u8 {
    128
}

pub fn load_config(path: &Path) -> Result<GridToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<GridToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}
