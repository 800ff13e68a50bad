//! Common test utilities for colstats-polars tests

#![allow(dead_code)]

use polars::prelude::*;
use std::path::PathBuf;

/// Five-row frame with a `value` column, matching the usual fixture
pub fn five_row_df() -> DataFrame {
    df!["value" => [10i64, 20, 30, 40, 50]].unwrap()
}

/// CSV file in the temp dir that is removed on drop
pub struct TempCsv {
    pub path: PathBuf,
}

impl TempCsv {
    pub fn new(contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("colstats-{}.csv", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        Self { path }
    }
}

impl Drop for TempCsv {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
