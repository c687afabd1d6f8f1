#![doc = include_str!("../README.md")]

pub mod arrangement;
pub mod builder;
pub mod cluster1d;
pub mod config;
pub mod diagnostics;
pub mod edges;
pub mod error;
pub mod io;
pub mod locate;
pub mod segments;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::arrangement::{Arrangement, ArrangementBuilder};
pub use crate::builder::{GridBuilder, GridBuilderParams};
pub use crate::diagnostics::{BuildReport, BuildTrace};
pub use crate::edges::EdgePixels;
pub use crate::error::GridError;
pub use crate::locate::CellLocator;
pub use crate::segments::{RawSegment, Segment};
pub use crate::types::{Axis, Canvas, Cell, Orientation, Point};

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::{
        Arrangement, CellLocator, Canvas, Cell, EdgePixels, GridBuilder, GridBuilderParams,
        GridError, Point, Segment,
    };
}
