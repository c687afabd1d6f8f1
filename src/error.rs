use crate::types::{Axis, Orientation, Point};

/// Failures that stop an arrangement from being built or queried.
///
/// Clusters that collapse to no usable run are not errors: they are skipped
/// and counted in the build trace.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// Canvas with a zero dimension.
    InvalidCanvas { width: u32, height: u32 },
    /// Edge pixel outside `[0, W) x [0, H)`.
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    /// Parameter set violating its documented ranges.
    InvalidParams(String),
    /// Fewer than two distinct coordinate values along an axis.
    InsufficientSamples { axis: Axis, unique: usize },
    /// A snap or point-location step found no candidate line.
    ArrangementInvariantViolation {
        orientation: Orientation,
        coordinate: f32,
        reason: &'static str,
    },
    /// Query point outside the closed canvas rectangle.
    PointOutsideCanvas { point: Point },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::InvalidCanvas { width, height } => {
                write!(f, "invalid canvas {width}x{height}")
            }
            GridError::PixelOutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(f, "edge pixel ({x}, {y}) outside {width}x{height} canvas"),
            GridError::InvalidParams(msg) => write!(f, "invalid parameters: {msg}"),
            GridError::InsufficientSamples { axis, unique } => write!(
                f,
                "insufficient samples on {axis} axis ({unique} unique values, need >= 2)"
            ),
            GridError::ArrangementInvariantViolation {
                orientation,
                coordinate,
                reason,
            } => write!(
                f,
                "arrangement invariant violated at {orientation:?} line {coordinate}: {reason}"
            ),
            GridError::PointOutsideCanvas { point } => {
                write!(f, "point ({}, {}) outside canvas", point.x, point.y)
            }
        }
    }
}

impl std::error::Error for GridError {}
