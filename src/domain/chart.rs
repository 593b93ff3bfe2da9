// Chart geometry domain models
use super::sample::Metric;
use thiserror::Error;

/// Left margin reserved for the axis labels
pub const MARGIN_LEFT: f64 = 25.0;
/// Margin on the right, top and bottom edges
pub const MARGIN_EDGE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Whole-number labels drawn at the bottom and top of the value axis.
/// `min_label <= min(values)` and `max_label >= max(values)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisBounds {
    pub min_label: i64,
    pub max_label: i64,
}

impl AxisBounds {
    pub fn new(min_label: i64, max_label: i64) -> Self {
        Self {
            min_label,
            max_label,
        }
    }
}

/// Logical drawing area in SVG user units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    width: f64,
    height: f64,
}

impl Canvas {
    /// Both sides must be finite and larger than the fixed margins: width above
    /// 30 and height above 10, not merely positive.
    pub fn new(width: f64, height: f64) -> Result<Self, ChartError> {
        let usable = width.is_finite()
            && height.is_finite()
            && width > MARGIN_LEFT + MARGIN_EDGE
            && height > 2.0 * MARGIN_EDGE;

        if !usable {
            return Err(ChartError::InvalidCanvas { width, height });
        }

        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// x of the right end of the time axis
    pub fn right(&self) -> f64 {
        self.width - MARGIN_EDGE
    }

    /// y of the time axis
    pub fn bottom(&self) -> f64 {
        self.height - MARGIN_EDGE
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 150.0,
        }
    }
}

/// Normalizer output consumed verbatim by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSeries {
    pub points: Vec<PlotPoint>,
    pub bounds: AxisBounds,
}

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("no samples recorded yet")]
    EmptyHistory,
    #[error("sample {index} has a non-finite {metric} value")]
    InvalidSample { index: usize, metric: Metric },
    #[error("{metric} values are too large to chart")]
    OutOfRange { metric: Metric },
    #[error("canvas {width}x{height} leaves no room for the plot area")]
    InvalidCanvas { width: f64, height: f64 },
}
