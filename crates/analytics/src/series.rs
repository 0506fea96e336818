use crate::error::AnalyticsError;
use crate::sparkline::{self, SparkPoint};
use crate::trend::{self, TrendDirection};
use serde::{Deserialize, Serialize};

/// An ordered sequence of numeric samples, oldest first (e.g. weekly sales of one product).
///
/// The samples are fixed once the series is built. A refreshed data set produces a new series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricSeries(Vec<f64>);

impl MetricSeries {
    pub fn new(samples: Vec<f64>) -> Self {
        Self(samples)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// See [`trend::classify_trend`].
    pub fn trend(&self) -> Result<TrendDirection, AnalyticsError> {
        trend::classify_trend(&self.0)
    }

    /// See [`sparkline::normalize`].
    pub fn normalize(&self) -> Result<Vec<SparkPoint>, AnalyticsError> {
        sparkline::normalize(&self.0)
    }
}

impl From<Vec<f64>> for MetricSeries {
    fn from(samples: Vec<f64>) -> Self {
        Self::new(samples)
    }
}

impl From<&[f64]> for MetricSeries {
    fn from(samples: &[f64]) -> Self {
        Self::new(samples.to_vec())
    }
}

/// Rejects empty input and any NaN or infinite sample.
pub(crate) fn ensure_usable(samples: &[f64], operation: &str) -> Result<(), AnalyticsError> {
    if samples.is_empty() {
        return Err(AnalyticsError::InvalidArgument(format!(
            "{operation} requires a non-empty series"
        )));
    }
    if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
        return Err(AnalyticsError::InvalidArgument(format!(
            "{operation} received a non-finite sample at index {index}"
        )));
    }
    Ok(())
}

/// The statistical median: the middle element of the sorted samples, or the mean of the
/// two middle elements when the count is even.
pub fn median(samples: &[f64]) -> Result<f64, AnalyticsError> {
    ensure_usable(samples, "median")?;

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        // Halve before adding so two large samples cannot overflow to infinity.
        Ok(sorted[mid - 1] / 2.0 + sorted[mid] / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_odd_length_is_middle_element() {
        assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
    }

    #[test]
    fn median_of_even_length_is_mean_of_middle_pair() {
        assert_eq!(median(&[7.0, 4.0, 6.0, 5.0]).unwrap(), 5.5);
    }

    #[test]
    fn median_of_huge_pair_stays_finite() {
        let m = median(&[f64::MAX, f64::MAX]).unwrap();
        assert_eq!(m, f64::MAX);
        let m = median(&[0.9 * f64::MAX, 0.95 * f64::MAX]).unwrap();
        assert!(m.is_finite());
    }

    #[test]
    fn median_rejects_empty_and_non_finite() {
        assert!(matches!(median(&[]), Err(AnalyticsError::InvalidArgument(_))));
        assert!(matches!(
            median(&[1.0, f64::NAN]),
            Err(AnalyticsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn series_delegates_to_free_functions() {
        let series = MetricSeries::from(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(series.trend().unwrap(), TrendDirection::Rising);
        assert_eq!(series.normalize().unwrap().len(), 4);
        assert!(MetricSeries::default().trend().is_err());
    }
}
