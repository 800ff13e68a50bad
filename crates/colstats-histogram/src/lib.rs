//! Fixed-width histograms for column statistics
//!
//! This crate builds equal-width histograms from numeric collections and
//! hands them to a visualizer for display.
//!
//! # Examples
//!
//! ## Building a histogram
//!
//! ```rust
//! use colstats_histogram::FixedWidthBuilder;
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let histogram = FixedWidthBuilder::new(5).unwrap().build(&data).unwrap();
//!
//! for bin in histogram.bins() {
//!     println!("  [{:.1}, {:.1}): count={}", bin.left, bin.right, bin.count);
//! }
//! ```
//!
//! ## Plotting
//!
//! ```rust
//! use colstats_histogram::{plot_histogram, NullVisualizer, TerminalVisualizer};
//!
//! let data = vec![3, 1, 4, 1, 5, 9, 2, 6];
//! plot_histogram(&data, 4, &NullVisualizer).unwrap();
//! plot_histogram(&data, 4, &TerminalVisualizer::default()).unwrap();
//! ```

pub mod builders;
pub mod style;
pub mod types;
pub mod visualization;

pub use builders::FixedWidthBuilder;
pub use style::{PlotStyle, Rgb};
pub use types::{Histogram, HistogramBin};
pub use visualization::{HistogramVisualizer, NullVisualizer, SvgVisualizer, TerminalVisualizer};

use colstats_core::{to_numbers, AsNumeric};

/// Default number of histogram bins
pub const DEFAULT_BINS: usize = 10;

/// Build a histogram of `values` and render it with the default style
///
/// # Errors
/// * [`colstats_core::Error::InvalidParameter`] if `num_bins` is zero
/// * [`colstats_core::Error::TypeMismatch`] if any item is not numeric
/// * [`colstats_core::Error::Visualization`] if the visualizer fails
pub fn plot_histogram<V, Z>(values: &[V], num_bins: usize, visualizer: &Z) -> Result<()>
where
    V: AsNumeric,
    Z: HistogramVisualizer + ?Sized,
{
    plot_histogram_styled(values, num_bins, visualizer, &PlotStyle::default())
}

/// [`plot_histogram`] with an explicit style
pub fn plot_histogram_styled<V, Z>(
    values: &[V],
    num_bins: usize,
    visualizer: &Z,
    style: &PlotStyle,
) -> Result<()>
where
    V: AsNumeric,
    Z: HistogramVisualizer + ?Sized,
{
    let builder = FixedWidthBuilder::new(num_bins)?;
    let numbers = to_numbers(values)?;
    let histogram = builder.build(&numbers)?;
    visualizer.render(&histogram, style)
}

pub use colstats_core::Result;
