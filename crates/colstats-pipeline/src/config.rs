//! Pipeline configuration

use colstats_histogram::{SvgVisualizer, TerminalVisualizer, DEFAULT_BINS};
use colstats_polars::DEFAULT_SAMPLE_SIZE;
use std::path::{Path, PathBuf};

/// Name of the column the pipeline analyses
pub const VALUE_COLUMN: &str = "value";

/// Settings for one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    path: PathBuf,
    sample_size: usize,
    num_bins: usize,
    plot_output: Option<PathBuf>,
}

impl PipelineConfig {
    /// Configuration for `path` with default sample size and bin count
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            num_bins: DEFAULT_BINS,
            plot_output: None,
        }
    }

    /// Set the number of rows to sample
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Set the number of histogram bins
    pub fn with_num_bins(mut self, num_bins: usize) -> Self {
        self.num_bins = num_bins;
        self
    }

    /// Also write the histogram to an SVG file
    pub fn with_plot_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.plot_output = Some(path.into());
        self
    }

    /// Input CSV file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of rows to sample
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Number of histogram bins
    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    /// SVG output path, if any
    pub fn plot_output(&self) -> Option<&Path> {
        self.plot_output.as_deref()
    }

    /// Terminal display, plus an SVG file when `plot_output` is set
    pub fn visualizer(&self) -> (TerminalVisualizer, Option<SvgVisualizer>) {
        (
            TerminalVisualizer::default(),
            self.plot_output.as_ref().map(SvgVisualizer::new),
        )
    }
}
