//! Unrolling of global wind fields into delimited lat/lon rows.
//!
//! A wind field arrives as two flat JSON arrays, U and V, ordered along a
//! fixed 1-degree global grid (360 x 181, 90°N to 90°S, 0°E eastwards).
//! This crate pairs the two arrays, derives each sample's position from its
//! index and writes one line per sample.
//!
//! # Example
//!
//! ```no_run
//! use wind_common::transform_wind_data;
//!
//! let summary = transform_wind_data(
//!     "./data/current-wind-surface-level-gfs-1.0.json",
//!     "./data/current-wind.csv",
//!     None,
//! )?;
//! println!("{} rows", summary.rows);
//! # Ok::<(), wind_common::WindError>(())
//! ```

pub mod dataset;
pub mod error;
pub mod grid;
pub mod number;
pub mod sample;
pub mod transform;
pub mod writer;

pub use dataset::{ComponentHeader, WindComponent, WindDataset};
pub use error::{WindError, WindResult};
pub use grid::{GridPosition, GridPositions, GridSpec};
pub use number::NumberText;
pub use sample::{samples, WindSample};
pub use transform::{
    transform_wind_data, transform_wind_data_with, TransformOptions, TransformSummary,
};
pub use writer::{DelimitedWriter, DEFAULT_SEPARATOR, HEADER_FIELDS};
