//! Histogram building strategies

use crate::types::{Histogram, HistogramBin};
use colstats_core::{Error, Result};
use tracing::debug;

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins spanning
/// `[min, max]` of the sample. When every value is identical the range is
/// widened to `[v - 0.5, v + 0.5]` so the bins keep a positive width.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthBuilder {
    num_bins: usize,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Result<Self> {
        if num_bins == 0 {
            return Err(Error::InvalidParameter(
                "number of bins must be positive".to_string(),
            ));
        }
        Ok(Self { num_bins })
    }

    /// Build a histogram from an unsorted sample
    ///
    /// An empty sample gives an empty histogram. The last bin is closed on
    /// the right so the maximum is always counted.
    pub fn build(&self, sample: &[f64]) -> Result<Histogram> {
        if sample.iter().any(|x| !x.is_finite()) {
            return Err(Error::InvalidInput(
                "histogram input contains NaN or infinite values".to_string(),
            ));
        }
        if sample.is_empty() {
            return Ok(Histogram::empty());
        }

        let mut sorted = sample.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let total = sorted.len();
        let min = sorted[0];
        let max = sorted[total - 1];

        let (lo, hi) = if max == min {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };

        let width = (hi - lo) / self.num_bins as f64;
        let mut bins = Vec::with_capacity(self.num_bins);

        for i in 0..self.num_bins {
            let left = lo + i as f64 * width;
            let right = if i == self.num_bins - 1 {
                hi // Last bin ends exactly at the upper edge
            } else {
                lo + (i + 1) as f64 * width
            };
            bins.push(HistogramBin::new(left, right, 0, total));
        }

        // Single pass through sorted data
        let mut current_bin = 0;
        for &value in &sorted {
            while current_bin < self.num_bins - 1 && value >= bins[current_bin].right {
                current_bin += 1;
            }
            bins[current_bin].count += 1;
        }

        for bin in &mut bins {
            *bin = HistogramBin::new(bin.left, bin.right, bin.count, total);
        }

        debug!(num_bins = self.num_bins, lo, hi, "built fixed-width histogram");
        Ok(Histogram::new(bins, total, min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_bins_rejected() {
        assert!(matches!(
            FixedWidthBuilder::new(0),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_fixed_width_counts() {
        let data: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        let hist = FixedWidthBuilder::new(5).unwrap().build(&data).unwrap();

        assert_eq!(hist.len(), 5);
        assert_eq!(hist.counts(), vec![2, 2, 2, 2, 2]);
        assert_eq!(hist.total_count(), 10);
        assert_relative_eq!(hist.edges()[0], 1.0);
        assert_relative_eq!(*hist.edges().last().unwrap(), 10.0);
    }

    #[test]
    fn test_max_lands_in_last_bin() {
        let data = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let hist = FixedWidthBuilder::new(4).unwrap().build(&data).unwrap();
        assert_eq!(hist.counts(), vec![1, 1, 1, 2]);
    }

    #[test]
    fn test_unsorted_input() {
        let data = vec![9.0, 1.0, 5.0, 1.0];
        let hist = FixedWidthBuilder::new(2).unwrap().build(&data).unwrap();
        assert_eq!(hist.counts(), vec![2, 2]);
    }

    #[test]
    fn test_constant_sample_widens_range() {
        let data = vec![3.0; 6];
        let hist = FixedWidthBuilder::new(10).unwrap().build(&data).unwrap();

        assert_eq!(hist.len(), 10);
        assert_relative_eq!(hist.edges()[0], 2.5);
        assert_relative_eq!(*hist.edges().last().unwrap(), 3.5);
        assert_eq!(hist.counts().iter().sum::<usize>(), 6);
        assert_eq!(hist.max_count(), 6);
    }

    #[test]
    fn test_tiny_spread_keeps_its_range() {
        let data = vec![1e-12, 2e-12];
        let hist = FixedWidthBuilder::new(2).unwrap().build(&data).unwrap();

        let edges = hist.edges();
        assert_relative_eq!(edges[0], 1e-12);
        assert_relative_eq!(edges[1], 1.5e-12, max_relative = 1e-9);
        assert_relative_eq!(edges[2], 2e-12);
        assert_eq!(hist.counts(), vec![1, 1]);
    }

    #[test]
    fn test_empty_sample() {
        let hist = FixedWidthBuilder::new(3).unwrap().build(&[]).unwrap();
        assert!(hist.is_empty());
        assert_eq!(hist.total_count(), 0);
    }

    #[test]
    fn test_non_finite_rejected() {
        let result = FixedWidthBuilder::new(3).unwrap().build(&[1.0, f64::NAN]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_densities_integrate_to_one() {
        let data = vec![0.5, 1.5, 1.7, 2.2, 3.9, 4.0];
        let hist = FixedWidthBuilder::new(4).unwrap().build(&data).unwrap();
        let area: f64 = hist.bins().iter().map(|b| b.density * b.width()).sum();
        assert_relative_eq!(area, 1.0, epsilon = 1e-12);
    }
}
