//! Column statistics for CSV files
//!
//! Facade over the colstats workspace crates:
//!
//! - [`stats`]: error type, dynamic cells, mean and standard deviation
//! - [`histogram`]: fixed-width histograms and visualizers
//! - [`polars`]: CSV loading, column extraction and row sampling
//! - [`pipeline`]: the end-to-end analysis
//!
//! # Example
//!
//! ```rust
//! use colstats::prelude::*;
//!
//! let data = vec![10, 20, 30];
//! let mean = compute_average(&data).unwrap();
//! assert_eq!(mean, 20.0);
//! ```

pub use colstats_core as stats;
pub use colstats_histogram as histogram;
pub use colstats_pipeline as pipeline;
pub use colstats_polars as polars;

/// Prelude module for convenient imports
pub mod prelude {
    pub use colstats_core::{compute_average, compute_std_dev, AsNumeric, Value};
    pub use colstats_histogram::{
        plot_histogram, HistogramVisualizer, NullVisualizer, SvgVisualizer, TerminalVisualizer,
    };
    pub use colstats_pipeline::{
        run_analysis_pipeline, run_analysis_pipeline_with, AnalysisSummary, PipelineConfig,
    };
    pub use colstats_polars::{read_csv, sample_rows, sample_rows_with_rng, ColumnStatsExt};
}
