use serde::{Deserialize, Serialize};

/// How many entities of a collection satisfy a predicate, and what share of the collection
/// that is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryStats {
    pub matching: usize,
    pub total: usize,
    /// `matching / total * 100`, or `0.0` for an empty collection.
    pub percentage: f64,
}

/// Counts the entities matching `predicate` over the whole collection.
///
/// Always returns a finite percentage in `[0, 100]`; an empty collection yields zero.
pub fn summarize<T, P>(entities: &[T], predicate: P) -> SummaryStats
where
    P: Fn(&T) -> bool,
{
    let total = entities.len();
    let matching = entities.iter().filter(|e| predicate(e)).count();

    let percentage = if total == 0 {
        0.0
    } else {
        (matching as f64 / total as f64) * 100.0
    };

    SummaryStats {
        matching,
        total,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_yields_zero_percentage() {
        let stats = summarize(&Vec::<u32>::new(), |_| true);
        assert_eq!(stats.matching, 0);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.percentage, 0.0);
        assert!(!stats.percentage.is_nan());
    }

    #[test]
    fn one_in_four_is_twenty_five_percent() {
        let statuses = ["delivered", "pending", "shipped", "canceled"];
        let stats = summarize(&statuses, |s| *s == "delivered");
        assert_eq!(stats.matching, 1);
        assert_eq!(stats.percentage, 25.0);
    }

    #[test]
    fn all_matching_is_one_hundred_percent() {
        let stats = summarize(&[1, 2, 3], |n| *n > 0);
        assert_eq!(stats.percentage, 100.0);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let values = [1, 2, 3, 4, 5, 6];
        let a = summarize(&values, |n| n % 3 == 0);
        let b = summarize(&values, |n| n % 3 == 0);
        assert_eq!(a.percentage.to_bits(), b.percentage.to_bits());
    }
}
