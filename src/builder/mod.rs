//! Edge pixels to arrangement, end to end.
//!
//! Overview
//! - Clusters the x and y coordinates of the edge pixels independently
//!   (concurrently with the `parallel` feature) and picks each axis'
//!   cluster count at the inertia elbow.
//! - Converts every cluster into gap-split, quantile-trimmed raw segments.
//! - Orders all raw segments longest first and snaps them into a
//!   border-seeded arrangement.
//!
//! Modules
//! - [`params`] – the immutable configuration shared by every stage.
//! - `pipeline` – the [`GridBuilder`] driver.

pub mod params;
mod pipeline;

pub use params::GridBuilderParams;
pub use pipeline::GridBuilder;
