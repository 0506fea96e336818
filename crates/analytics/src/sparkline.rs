use crate::error::AnalyticsError;
use crate::series::ensure_usable;
use serde::{Deserialize, Serialize};

/// Side length of the square canvas the points are mapped onto.
pub const CANVAS: f64 = 100.0;

/// A point on the `[0, 100] x [0, 100]` sparkline canvas. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SparkPoint {
    pub x: f64,
    pub y: f64,
}

/// Maps each sample onto the sparkline canvas.
///
/// `x` spreads the samples evenly from 0 to 100 by index. `y` scales the value between the
/// series' own min and max and inverts it, so the largest sample sits at `y = 0`.
///
/// A constant series (including a single sample) has no range; every point is placed on the
/// vertical midpoint. A single sample is placed at `x = 0`.
///
/// # Errors
///
/// `InvalidArgument` if the series is empty or contains a NaN/infinite sample.
pub fn normalize(series: &[f64]) -> Result<Vec<SparkPoint>, AnalyticsError> {
    ensure_usable(series, "normalize")?;

    let (min, max) = series
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        });
    // Halved so that samples spanning more than f64::MAX cannot overflow the range.
    let half_range = max / 2.0 - min / 2.0;
    let x_step = match series.len() {
        1 => 0.0,
        n => CANVAS / (n - 1) as f64,
    };

    let points = series
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let y = if half_range == 0.0 {
                CANVAS / 2.0
            } else {
                let share = ((value / 2.0 - min / 2.0) / half_range).clamp(0.0, 1.0);
                CANVAS - share * CANVAS
            };
            SparkPoint {
                x: index as f64 * x_step,
                y,
            }
        })
        .collect();

    Ok(points)
}
