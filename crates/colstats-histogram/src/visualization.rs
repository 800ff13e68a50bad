//! Visualization interface for histograms
//!
//! Building a histogram and showing it are kept apart. [`plot_histogram`]
//! builds the bins and hands them to a [`HistogramVisualizer`], which decides
//! where the chart goes: nowhere ([`NullVisualizer`]), the terminal
//! ([`TerminalVisualizer`]) or an SVG file ([`SvgVisualizer`]).
//!
//! [`plot_histogram`]: crate::plot_histogram

use crate::style::{PlotStyle, Rgb};
use crate::types::Histogram;
use colstats_core::{Error, Result};
use plotters::prelude::*;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Sink for rendered histograms
pub trait HistogramVisualizer {
    /// Render `histogram` with the given style
    fn render(&self, histogram: &Histogram, style: &PlotStyle) -> Result<()>;
}

impl<V: HistogramVisualizer + ?Sized> HistogramVisualizer for &V {
    fn render(&self, histogram: &Histogram, style: &PlotStyle) -> Result<()> {
        (**self).render(histogram, style)
    }
}

impl<V: HistogramVisualizer + ?Sized> HistogramVisualizer for Box<V> {
    fn render(&self, histogram: &Histogram, style: &PlotStyle) -> Result<()> {
        (**self).render(histogram, style)
    }
}

impl<V: HistogramVisualizer> HistogramVisualizer for Option<V> {
    fn render(&self, histogram: &Histogram, style: &PlotStyle) -> Result<()> {
        match self {
            Some(visualizer) => visualizer.render(histogram, style),
            None => Ok(()),
        }
    }
}

/// Renders with both visualizers, first `A` then `B`
impl<A: HistogramVisualizer, B: HistogramVisualizer> HistogramVisualizer for (A, B) {
    fn render(&self, histogram: &Histogram, style: &PlotStyle) -> Result<()> {
        self.0.render(histogram, style)?;
        self.1.render(histogram, style)
    }
}

/// Visualizer that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullVisualizer;

impl HistogramVisualizer for NullVisualizer {
    fn render(&self, _histogram: &Histogram, _style: &PlotStyle) -> Result<()> {
        Ok(())
    }
}

/// Text histogram written to stdout
#[derive(Debug, Clone, Copy)]
pub struct TerminalVisualizer {
    bar_width: usize,
}

impl Default for TerminalVisualizer {
    fn default() -> Self {
        Self { bar_width: 40 }
    }
}

impl TerminalVisualizer {
    /// Create a visualizer whose longest bar is `bar_width` characters
    pub fn new(bar_width: usize) -> Self {
        Self {
            bar_width: bar_width.max(1),
        }
    }

    /// Write the text histogram to any writer
    pub fn render_to<W: Write>(
        &self,
        histogram: &Histogram,
        style: &PlotStyle,
        out: &mut W,
    ) -> io::Result<()> {
        writeln!(out, "{}", style.title)?;
        writeln!(out, "{:<22} {}", style.x_label, style.y_label)?;

        if histogram.is_empty() {
            return writeln!(out, "(no data)");
        }

        let max_count = histogram.max_count().max(1);
        let last = histogram.len() - 1;
        for (i, bin) in histogram.bins().iter().enumerate() {
            let bar_len = (bin.count * self.bar_width + max_count / 2) / max_count;
            let close = if i == last { ']' } else { ')' };
            writeln!(
                out,
                "[{:>9.2}, {:>9.2}{} {} {}",
                bin.left,
                bin.right,
                close,
                "█".repeat(bar_len),
                bin.count
            )?;
        }
        Ok(())
    }
}

impl HistogramVisualizer for TerminalVisualizer {
    fn render(&self, histogram: &Histogram, style: &PlotStyle) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.render_to(histogram, style, &mut handle)?;
        handle.flush()?;
        Ok(())
    }
}

/// Chart written to an SVG file
#[derive(Debug, Clone)]
pub struct SvgVisualizer {
    path: PathBuf,
}

impl SvgVisualizer {
    /// Visualizer that writes to `path`, replacing any existing file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Output file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

fn visualization_error<E: Display>(err: E) -> Error {
    Error::Visualization(err.to_string())
}

impl HistogramVisualizer for SvgVisualizer {
    fn render(&self, histogram: &Histogram, style: &PlotStyle) -> Result<()> {
        let root = SVGBackend::new(&self.path, style.size).into_drawing_area();
        root.fill(&WHITE).map_err(visualization_error)?;

        let edges = histogram.edges();
        let (x_min, x_max) = match (edges.first(), edges.last()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => (0.0, 1.0),
        };
        let y_max = histogram.max_count().max(1) as f64 * 1.05;

        let mut chart = ChartBuilder::on(&root)
            .caption(style.title.as_str(), ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(x_min..x_max, 0f64..y_max)
            .map_err(visualization_error)?;

        chart
            .configure_mesh()
            .x_desc(style.x_label.as_str())
            .y_desc(style.y_label.as_str())
            .bold_line_style(rgb(style.grid).mix(style.grid_alpha))
            .light_line_style(rgb(style.grid).mix(style.grid_alpha * 0.3))
            .draw()
            .map_err(visualization_error)?;

        let fill = rgb(style.fill).filled();
        chart
            .draw_series(histogram.bins().iter().map(|bin| {
                Rectangle::new([(bin.left, 0.0), (bin.right, bin.count as f64)], fill)
            }))
            .map_err(visualization_error)?;

        let edge = rgb(style.edge).stroke_width(1);
        chart
            .draw_series(histogram.bins().iter().map(|bin| {
                Rectangle::new([(bin.left, 0.0), (bin.right, bin.count as f64)], edge)
            }))
            .map_err(visualization_error)?;

        root.present().map_err(visualization_error)?;
        debug!(path = %self.path.display(), "wrote histogram chart");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HistogramBin;
    use std::cell::Cell;

    fn sample_histogram() -> Histogram {
        let bins = vec![
            HistogramBin::new(0.0, 1.0, 1, 5),
            HistogramBin::new(1.0, 2.0, 4, 5),
        ];
        Histogram::new(bins, 5, 0.0, 2.0)
    }

    struct Counting(Cell<usize>);

    impl HistogramVisualizer for Counting {
        fn render(&self, _histogram: &Histogram, _style: &PlotStyle) -> Result<()> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn test_terminal_output() {
        let mut out = Vec::new();
        TerminalVisualizer::new(8)
            .render_to(&sample_histogram(), &PlotStyle::default(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Value distribution");
        assert!(lines[1].starts_with("Value"));
        assert!(lines[1].ends_with("Count"));
        assert!(lines[2].ends_with(") ██ 1"));
        assert!(lines[3].ends_with("] ████████ 4"));
    }

    #[test]
    fn test_terminal_empty() {
        let mut out = Vec::new();
        TerminalVisualizer::default()
            .render_to(&Histogram::empty(), &PlotStyle::default(), &mut out)
            .unwrap();
        assert!(String::from_utf8(out).unwrap().contains("(no data)"));
    }

    #[test]
    fn test_composite_visualizers() {
        let first = Counting(Cell::new(0));
        let second = Counting(Cell::new(0));
        let both = (&first, Some(&second));
        both.render(&sample_histogram(), &PlotStyle::default()).unwrap();
        assert_eq!(first.0.get(), 1);
        assert_eq!(second.0.get(), 1);

        let none: Option<Counting> = None;
        assert!(none.render(&sample_histogram(), &PlotStyle::default()).is_ok());
    }
}
