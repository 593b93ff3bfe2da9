// Normalizer - Maps a sample history onto canvas coordinates
use crate::domain::chart::{
    AxisBounds, Canvas, ChartError, MARGIN_EDGE, MARGIN_LEFT, NormalizedSeries, PlotPoint,
};
use crate::domain::sample::{Metric, Sample};

const LABEL_MIN: f64 = i64::MIN as f64;
const LABEL_LIMIT: f64 = i64::MAX as f64;

/// Project `history` (ascending by time) onto `canvas`.
///
/// Time runs left to right across `[25, width - 5]`, values bottom to top across
/// `[height - 5, 5]`. The value axis spans the floor of the smallest value to the
/// ceiling of the largest, so the returned labels always contain the data.
/// A zero time span puts every point on the left edge and a zero value span puts
/// every point on the bottom edge. Values whose rounded bounds do not fit an
/// `i64` label are rejected with `OutOfRange`.
pub fn normalize(
    history: &[Sample],
    metric: Metric,
    canvas: Canvas,
) -> Result<NormalizedSeries, ChartError> {
    if history.is_empty() {
        return Err(ChartError::EmptyHistory);
    }

    if let Some(index) = history
        .iter()
        .position(|sample| !metric.value(sample).is_finite())
    {
        return Err(ChartError::InvalidSample { index, metric });
    }

    let (min_time, max_time) = history
        .iter()
        .map(|sample| sample.timestamp.timestamp_millis())
        .fold((i64::MAX, i64::MIN), |(lo, hi), t| (lo.min(t), hi.max(t)));
    let time_span = (max_time - min_time) as f64;

    // Labels and point fractions both come from this one pair
    let (raw_min, raw_max) = history
        .iter()
        .map(|sample| metric.value(sample))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    let axis_min = raw_min.floor();
    let axis_max = raw_max.ceil();
    // i64::MAX as f64 rounds up to 2^63, which no i64 can hold
    if axis_min < LABEL_MIN || axis_max >= LABEL_LIMIT {
        return Err(ChartError::OutOfRange { metric });
    }
    let value_span = axis_max - axis_min;

    let width = canvas.width();
    let height = canvas.height();

    let points = history
        .iter()
        .map(|sample| {
            let t_frac = if time_span == 0.0 {
                0.0
            } else {
                (sample.timestamp.timestamp_millis() - min_time) as f64 / time_span
            };
            let v_frac = if value_span == 0.0 {
                0.0
            } else {
                (metric.value(sample) - axis_min) / value_span
            };

            let x = t_frac * (width - MARGIN_LEFT - MARGIN_EDGE) + MARGIN_LEFT;
            let y = height - v_frac * height;
            let y = y / height * (height - 2.0 * MARGIN_EDGE) + MARGIN_EDGE;

            PlotPoint::new(x, y)
        })
        .collect();

    Ok(NormalizedSeries {
        points,
        bounds: AxisBounds::new(axis_min as i64, axis_max as i64),
    })
}
