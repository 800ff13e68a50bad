//! Analyse `./data.csv`: summary statistics, histogram and a random peek

use colstats::pipeline::{run_analysis_pipeline_with, PipelineConfig};
use tracing_subscriber::EnvFilter;

const INPUT_PATH: &str = "./data.csv";
const SAMPLE_SIZE: usize = 5;
const NUM_BINS: usize = 12;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let config = PipelineConfig::new(INPUT_PATH)
        .with_sample_size(SAMPLE_SIZE)
        .with_num_bins(NUM_BINS);
    let visualizer = config.visualizer();

    if let Some(summary) = run_analysis_pipeline_with(&config, &visualizer, &mut rand::thread_rng())? {
        println!("\nAnalysis Summary");
        println!("{summary}");
    }

    Ok(())
}
