//! Segment types and the cluster-to-segment stage.
//!
//! Every cluster produced by [`crate::cluster1d`] is turned into zero or
//! more raw segments:
//!
//! - The line coordinate is the statistical mode of the cluster's own-axis
//!   values (smallest value on ties).
//! - The orthogonal coordinates of the cluster's pixels are sorted and cut
//!   into maximal runs wherever consecutive values differ by more than
//!   `min_percent_split` times the canvas extent along that direction.
//!   Runs with a single member are dropped.
//! - Each surviving run yields one segment whose endpoints sit at the
//!   `buffer_quantile` and `1 - buffer_quantile` quantiles (linear
//!   interpolation) of the run, trimming stray pixels at its ends.
//!
//! A cluster with no surviving run is degenerate: it contributes nothing
//! and is reported in [`RawSegmentSet::degenerate_clusters`].

mod options;
mod raw;
mod runs;
mod segment;
pub mod stats;

pub use options::RawSegmentParams;
pub use raw::{RawSegment, RawSegmentBuilder, RawSegmentSet};
pub use runs::split_runs;
pub use segment::Segment;
