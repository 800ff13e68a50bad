//! End-to-end analysis pipeline for a CSV `value` column
//!
//! Loads the file, computes the mean and population standard deviation of
//! the non-missing `value` cells, renders a histogram and logs a random
//! sample of rows.
//!
//! # Example
//!
//! ```rust,no_run
//! use colstats_pipeline::{run_analysis_pipeline_with, PipelineConfig};
//!
//! let config = PipelineConfig::new("./data.csv").with_num_bins(12);
//! let visualizer = config.visualizer();
//! if let Some(summary) =
//!     run_analysis_pipeline_with(&config, &visualizer, &mut rand::thread_rng()).unwrap()
//! {
//!     println!("{summary}");
//! }
//! ```

mod config;
mod pipeline;
mod summary;

pub use config::{PipelineConfig, VALUE_COLUMN};
pub use pipeline::{run_analysis_pipeline, run_analysis_pipeline_with};
pub use summary::AnalysisSummary;

pub use colstats_polars::{Error, Result};
