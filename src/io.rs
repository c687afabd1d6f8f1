//! I/O helpers for edge masks and JSON.
//!
//! - `load_edge_mask`: read a PNG/JPEG mask, convert to 8-bit luma and keep
//!   pixels at or above a threshold as edge pixels.
//! - `write_json_file`: stream a serializable value to disk as pretty JSON.
use crate::edges::EdgePixels;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Load a mask image from disk and extract its edge pixels.
pub fn load_edge_mask(path: &Path, threshold: u8) -> Result<EdgePixels, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let (width, height) = img.dimensions();
    EdgePixels::from_mask(width, height, img.as_raw(), threshold)
        .map_err(|e| format!("Invalid mask {}: {e}", path.display()))
}

/// Stream `value` as pretty JSON into `path`. Missing parent directories
/// are created first.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    let parent = path.parent().filter(|dir| !dir.as_os_str().is_empty());
    if let Some(dir) = parent {
        fs::create_dir_all(dir)
            .map_err(|e| format!("Cannot create output directory {}: {e}", dir.display()))?;
    }
    let file = File::create(path)
        .map_err(|e| format!("Cannot create output file {}: {e}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| format!("Cannot encode JSON into {}: {e}", path.display()))?;
    writer
        .flush()
        .map_err(|e| format!("Cannot flush {}: {e}", path.display()))
}
