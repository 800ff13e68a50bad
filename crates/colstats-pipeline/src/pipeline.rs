//! The analysis pipeline: load, summarise, plot, sample

use crate::config::{PipelineConfig, VALUE_COLUMN};
use crate::summary::AnalysisSummary;
use colstats_core::{compute_average, compute_std_dev, Value};
use colstats_histogram::{plot_histogram, HistogramVisualizer, TerminalVisualizer};
use colstats_polars::{read_csv, ColumnStatsExt, Result};
use rand::Rng;
use std::path::Path;
use tracing::{error, info, instrument};

/// Run the pipeline on `path` with the terminal visualizer and an unseeded RNG
///
/// Returns `Ok(None)` when the file does not exist.
pub fn run_analysis_pipeline(
    path: impl AsRef<Path>,
    sample_size: usize,
    num_bins: usize,
) -> Result<Option<AnalysisSummary>> {
    let config = PipelineConfig::new(path.as_ref())
        .with_sample_size(sample_size)
        .with_num_bins(num_bins);
    run_analysis_pipeline_with(&config, &TerminalVisualizer::default(), &mut rand::thread_rng())
}

/// Run the pipeline with an explicit visualizer and random source
///
/// Steps, in order: load the CSV, take the non-missing cells of the `value`
/// column, compute the mean and the population standard deviation, render
/// the histogram, then sample `sample_size` rows from the whole table.
///
/// A missing input file is logged and reported as `Ok(None)`. Every other
/// failure is returned as an error: a missing `value` column, non-numeric or
/// empty data, an invalid bin count, or a sample larger than the table.
#[instrument(skip_all, fields(path = %config.path().display()))]
pub fn run_analysis_pipeline_with<V, R>(
    config: &PipelineConfig,
    visualizer: &V,
    rng: &mut R,
) -> Result<Option<AnalysisSummary>>
where
    V: HistogramVisualizer + ?Sized,
    R: Rng + ?Sized,
{
    info!("Starting analysis for '{}'", config.path().display());
    let df = match read_csv(config.path()) {
        Ok(df) => df,
        Err(err) if err.is_file_not_found() => {
            error!(
                "Input file '{}' not found, nothing to analyse",
                config.path().display()
            );
            return Ok(None);
        }
        Err(err) => return Err(err),
    };

    let values = df.non_missing_values(VALUE_COLUMN)?;

    info!("Calculating average");
    let average = compute_average(&values)?;
    info!("Average = {average:.2}");

    info!("Calculating standard deviation");
    let std_deviation = compute_std_dev(&values, average)?;
    info!("Std Dev = {std_deviation:.2}");

    info!("Plotting histogram with {} bins", config.num_bins());
    plot_histogram(&values, config.num_bins(), visualizer)?;

    info!("Sampling {} random values", config.sample_size());
    let sampled = df.sample_rows_with_rng(VALUE_COLUMN, config.sample_size(), rng)?;
    info!("Sampled values: [{}]", join_values(&sampled));

    info!("Analysis complete");
    Ok(Some(AnalysisSummary {
        average,
        std_deviation,
    }))
}

fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
