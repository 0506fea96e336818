use crate::error::AnalyticsError;
use crate::series::{ensure_usable, median};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Direction of a series, judged by comparing the medians of its later and earlier halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Rising,
    Falling,
    Flat,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrendDirection::Rising => "rising",
            TrendDirection::Falling => "falling",
            TrendDirection::Flat => "flat",
        };
        f.write_str(label)
    }
}

/// Classifies the direction of `series`.
///
/// The first half holds the `n / 2` earliest samples and the second half the rest, so an odd
/// sample count puts the extra sample in the second half. The result compares the median of
/// each half. A single sample has no first half and is `Flat`.
///
/// # Errors
///
/// `InvalidArgument` if the series is empty or contains a NaN/infinite sample.
pub fn classify_trend(series: &[f64]) -> Result<TrendDirection, AnalyticsError> {
    ensure_usable(series, "classify_trend")?;

    if series.len() == 1 {
        return Ok(TrendDirection::Flat);
    }

    let (first, second) = series.split_at(series.len() / 2);
    let first_median = median(first)?;
    let second_median = median(second)?;
    tracing::trace!(first_median, second_median, samples = series.len(), "Trend medians.");

    // Both medians are finite, so partial_cmp always yields an ordering.
    let direction = match second_median.partial_cmp(&first_median) {
        Some(Ordering::Greater) => TrendDirection::Rising,
        Some(Ordering::Less) => TrendDirection::Falling,
        _ => TrendDirection::Flat,
    };
    Ok(direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_series_is_rising() {
        // [1,2,3] median 2 vs [4,5,6,7] median 5.5
        let series = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        assert_eq!(classify_trend(&series).unwrap(), TrendDirection::Rising);
    }

    #[test]
    fn descending_series_is_falling() {
        let series = [7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        assert_eq!(classify_trend(&series).unwrap(), TrendDirection::Falling);
    }

    #[test]
    fn constant_series_is_flat() {
        assert_eq!(classify_trend(&[5.0, 5.0, 5.0, 5.0]).unwrap(), TrendDirection::Flat);
    }

    #[test]
    fn single_sample_is_flat() {
        assert_eq!(classify_trend(&[3.0]).unwrap(), TrendDirection::Flat);
    }

    #[test]
    fn two_samples_compare_directly() {
        assert_eq!(classify_trend(&[1.0, 2.0]).unwrap(), TrendDirection::Rising);
        assert_eq!(classify_trend(&[2.0, 1.0]).unwrap(), TrendDirection::Falling);
    }

    #[test]
    fn odd_extra_sample_belongs_to_second_half() {
        // [10] vs [4, 12] (median 8) is falling; splitting as [10, 4] vs [12] would rise.
        assert_eq!(classify_trend(&[10.0, 4.0, 12.0]).unwrap(), TrendDirection::Falling);
    }

    #[test]
    fn medians_resist_outliers() {
        // Mean of second half is higher, median is lower.
        let series = [5.0, 5.0, 5.0, 1.0, 1.0, 100.0];
        assert_eq!(classify_trend(&series).unwrap(), TrendDirection::Falling);
    }

    #[test]
    fn huge_samples_do_not_collapse_to_flat() {
        let series = [f64::MAX, f64::MAX, 0.9 * f64::MAX, 0.95 * f64::MAX];
        assert_eq!(classify_trend(&series).unwrap(), TrendDirection::Falling);
    }

    #[test]
    fn empty_series_is_invalid() {
        assert!(matches!(
            classify_trend(&[]),
            Err(AnalyticsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn infinite_sample_is_invalid() {
        assert!(classify_trend(&[1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn repeated_calls_agree() {
        let series = [45.0, 52.0, 48.0, 60.0, 55.0, 62.0, 58.0];
        assert_eq!(classify_trend(&series).unwrap(), classify_trend(&series).unwrap());
    }
}
