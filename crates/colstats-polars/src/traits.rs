//! Extension trait for column statistics on Polars DataFrames

use crate::{convert, sampling, Result};
use colstats_core::{compute_average, compute_std_dev, drop_missing, Value};
use polars::prelude::*;
use rand::Rng;

/// Extension trait for column statistics operations on Polars DataFrames
pub trait ColumnStatsExt {
    /// All cells of `column` in row order, missing cells included
    fn column_values(&self, column: &str) -> Result<Vec<Value>>;

    /// Cells of `column` with missing entries dropped
    fn non_missing_values(&self, column: &str) -> Result<Vec<Value>>;

    /// Mean of the non-missing cells of `column`
    fn column_average(&self, column: &str) -> Result<f64>;

    /// Population standard deviation of the non-missing cells of `column`
    fn column_std_dev(&self, column: &str) -> Result<f64>;

    /// Random sample of `num_samples` cells from distinct rows
    fn sample_rows(&self, column: &str, num_samples: usize) -> Result<Vec<Value>>;

    /// Random sample drawn with the supplied generator
    fn sample_rows_with_rng<R: Rng + ?Sized>(
        &self,
        column: &str,
        num_samples: usize,
        rng: &mut R,
    ) -> Result<Vec<Value>>;
}

impl ColumnStatsExt for DataFrame {
    fn column_values(&self, column: &str) -> Result<Vec<Value>> {
        convert::column_values(self, column)
    }

    fn non_missing_values(&self, column: &str) -> Result<Vec<Value>> {
        Ok(drop_missing(convert::column_values(self, column)?))
    }

    fn column_average(&self, column: &str) -> Result<f64> {
        let values = self.non_missing_values(column)?;
        Ok(compute_average(&values)?)
    }

    fn column_std_dev(&self, column: &str) -> Result<f64> {
        let values = self.non_missing_values(column)?;
        let mean = compute_average(&values)?;
        Ok(compute_std_dev(&values, mean)?)
    }

    fn sample_rows(&self, column: &str, num_samples: usize) -> Result<Vec<Value>> {
        sampling::sample_rows(self, column, num_samples)
    }

    fn sample_rows_with_rng<R: Rng + ?Sized>(
        &self,
        column: &str,
        num_samples: usize,
        rng: &mut R,
    ) -> Result<Vec<Value>> {
        sampling::sample_rows_with_rng(self, column, num_samples, rng)
    }
}
