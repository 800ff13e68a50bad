//! Common test utilities for pipeline tests

#![allow(dead_code)]

use colstats_histogram::{Histogram, HistogramVisualizer, PlotStyle};
use std::cell::RefCell;
use std::path::PathBuf;

/// CSV file in the temp dir that is removed on drop
pub struct TempCsv {
    pub path: PathBuf,
}

impl TempCsv {
    pub fn new(contents: &str) -> Self {
        let path = temp_path("csv");
        std::fs::write(&path, contents).unwrap();
        Self { path }
    }
}

impl Drop for TempCsv {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Unique path in the temp dir with the given extension
pub fn temp_path(extension: &str) -> PathBuf {
    std::env::temp_dir().join(format!("colstats-{}.{extension}", uuid::Uuid::new_v4()))
}

/// Visualizer that keeps every histogram it is given
#[derive(Default)]
pub struct RecordingVisualizer {
    pub rendered: RefCell<Vec<Histogram>>,
}

impl HistogramVisualizer for RecordingVisualizer {
    fn render(&self, histogram: &Histogram, _style: &PlotStyle) -> colstats_core::Result<()> {
        self.rendered.borrow_mut().push(histogram.clone());
        Ok(())
    }
}
