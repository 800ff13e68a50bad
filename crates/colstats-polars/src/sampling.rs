//! Random row sampling

use crate::convert::{cell_value, lookup_column};
use crate::{Error, Result};
use colstats_core::Value;
use polars::prelude::*;
use rand::seq::index;
use rand::Rng;
use tracing::debug;

/// Default number of rows to sample
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Draw `num_samples` distinct rows at random and return their `column` cells
///
/// Uses the thread-local generator, so results differ between runs. See
/// [`sample_rows_with_rng`] for a reproducible draw.
pub fn sample_rows(df: &DataFrame, column: &str, num_samples: usize) -> Result<Vec<Value>> {
    sample_rows_with_rng(df, column, num_samples, &mut rand::thread_rng())
}

/// Draw `num_samples` distinct rows using `rng`
///
/// Rows are chosen uniformly without replacement and the values come back in
/// the order the rows were drawn. Missing cells are returned as
/// [`Value::Missing`].
///
/// # Errors
/// * [`Error::ColumnNotFound`] if `column` does not exist
/// * [`colstats_core::Error::InsufficientData`] if `num_samples` exceeds the
///   number of rows
pub fn sample_rows_with_rng<R: Rng + ?Sized>(
    df: &DataFrame,
    column: &str,
    num_samples: usize,
    rng: &mut R,
) -> Result<Vec<Value>> {
    let column = lookup_column(df, column)?;
    let rows = df.height();
    if num_samples > rows {
        return Err(Error::Core(colstats_core::Error::InsufficientData {
            expected: num_samples,
            actual: rows,
        }));
    }

    let series = column.as_materialized_series();
    let indices = index::sample(rng, rows, num_samples);
    debug!(?indices, "drew sample rows");

    indices
        .iter()
        .map(|i| -> Result<Value> { Ok(cell_value(series.get(i)?)) })
        .collect()
}
