//! Edge-pixel input set.
//!
//! The edge detector is an external collaborator; this module only holds
//! its output: a deduplicated set of integer pixel coordinates inside the
//! canvas, in row-major order (by y, then x) so every downstream stage sees
//! the same sample order regardless of how the set was produced.

use crate::error::GridError;
use crate::types::{Axis, Canvas};

/// Validated, deduplicated edge pixels of one canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgePixels {
    canvas: Canvas,
    /// `[x, y]` pairs sorted by `(y, x)`.
    pixels: Vec<[u32; 2]>,
}

impl EdgePixels {
    /// Validate `pixels` against `canvas`, sort them row-major and drop
    /// duplicates.
    pub fn new(canvas: Canvas, mut pixels: Vec<[u32; 2]>) -> Result<Self, GridError> {
        if canvas.is_empty() {
            return Err(GridError::InvalidCanvas {
                width: canvas.width,
                height: canvas.height,
            });
        }
        if let Some(&[x, y]) = pixels.iter().find(|p| !canvas.contains_pixel(p[0], p[1])) {
            return Err(GridError::PixelOutOfBounds {
                x,
                y,
                width: canvas.width,
                height: canvas.height,
            });
        }
        pixels.sort_unstable_by_key(|p| (p[1], p[0]));
        pixels.dedup();
        Ok(Self { canvas, pixels })
    }

    /// Pixels of a row-major 8-bit mask whose value is `>= threshold`.
    pub fn from_mask(
        width: u32,
        height: u32,
        data: &[u8],
        threshold: u8,
    ) -> Result<Self, GridError> {
        let canvas = Canvas::new(width, height);
        if canvas.is_empty() || data.len() != width as usize * height as usize {
            return Err(GridError::InvalidCanvas { width, height });
        }
        let pixels = data
            .chunks_exact(width as usize)
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .filter(move |&(_, &v)| v >= threshold)
                    .map(move |(x, _)| [x as u32, y as u32])
            })
            .collect();
        // Already row-major and unique.
        Ok(Self { canvas, pixels })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn pixels(&self) -> &[[u32; 2]] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Coordinates along `axis`, aligned with [`Self::pixels`].
    pub fn coordinates(&self, axis: Axis) -> Vec<u32> {
        let i = match axis {
            Axis::X => 0,
            Axis::Y => 1,
        };
        self.pixels.iter().map(|p| p[i]).collect()
    }
}
