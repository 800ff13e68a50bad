//! Fixed presentation settings for histogram charts

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const SKY_BLUE: Rgb = Rgb(135, 206, 235);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const GREY: Rgb = Rgb(128, 128, 128);
}

/// Presentation of a histogram chart
///
/// The defaults reproduce the chart the analysis has always drawn: a 7x4
/// inch figure at 100 dpi, sky blue bars with black edges and a light grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    /// Chart title
    pub title: String,
    /// X-axis description
    pub x_label: String,
    /// Y-axis description
    pub y_label: String,
    /// Output size in pixels
    pub size: (u32, u32),
    /// Bar fill
    pub fill: Rgb,
    /// Bar outline
    pub edge: Rgb,
    /// Grid line color
    pub grid: Rgb,
    /// Grid line opacity in `[0, 1]`
    pub grid_alpha: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            title: "Value distribution".to_string(),
            x_label: "Value".to_string(),
            y_label: "Count".to_string(),
            size: (700, 400),
            fill: Rgb::SKY_BLUE,
            edge: Rgb::BLACK,
            grid: Rgb::GREY,
            grid_alpha: 0.6,
        }
    }
}
