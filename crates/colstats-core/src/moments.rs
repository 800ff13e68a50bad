//! First and second moments: mean and population standard deviation

use crate::value::{to_numbers, AsNumeric};
use crate::{Error, Result};

/// Arithmetic mean of a numeric collection
///
/// # Errors
/// * [`Error::InvalidInput`] if `values` is empty
/// * [`Error::TypeMismatch`] if any item is not numeric
pub fn compute_average<V: AsNumeric>(values: &[V]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::empty_input("average"));
    }

    let numbers = to_numbers(values)?;
    Ok(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

/// Population standard deviation around a precomputed mean
///
/// The denominator is the number of items, not `n - 1`. `mean` is taken as
/// given and is not checked against `values`.
///
/// # Errors
/// * [`Error::InvalidInput`] if `values` is empty
/// * [`Error::TypeMismatch`] if any item is not numeric
pub fn compute_std_dev<V: AsNumeric>(values: &[V], mean: f64) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::empty_input("standard deviation"));
    }

    let numbers = to_numbers(values)?;
    let n = numbers.len() as f64;
    let variance = numbers
        .iter()
        .map(|&x| {
            let diff = x - mean;
            diff * diff
        })
        .sum::<f64>()
        / n;

    Ok(variance.sqrt())
}
