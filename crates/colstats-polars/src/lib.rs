//! Polars integration for column statistics
//!
//! Loads CSV files into Polars DataFrames, extracts columns as dynamic
//! [`Value`](colstats_core::Value) cells, and samples rows. Most callers only
//! need [`read_csv`] and the [`ColumnStatsExt`] extension trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use polars::prelude::*;
//! use colstats_polars::{read_csv, ColumnStatsExt};
//!
//! let df = read_csv("data.csv")?;
//! let mean = df.column_average("value")?;
//! let peek = df.sample_rows("value", 5)?;
//! ```

mod convert;
mod error;
mod io;
mod sampling;
mod traits;

pub use convert::{cell_value, column_values};
pub use error::{Error, Result};
pub use io::{read_csv, NULL_MARKERS};
pub use sampling::{sample_rows, sample_rows_with_rng, DEFAULT_SAMPLE_SIZE};
pub use traits::*;

// Re-export so downstream crates need not depend on polars directly
pub use polars::prelude::DataFrame;
