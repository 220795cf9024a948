use serde::{Deserialize, Serialize};
use tracing::debug;

/// Minimum fractional separation between consecutively accepted levels of the
/// same kind. A new support must sit at least 2% below the previous one, a
/// new resistance at least 2% above.
pub const TOLERANCE: f64 = 0.02;

/// Hard cap per level kind.
pub const MAX_LEVELS: usize = 3;

/// Support and resistance levels in the order they were discovered while
/// scanning the series left to right.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelSet {
    pub supports: Vec<f64>,
    pub resistances: Vec<f64>,
}

/// Global price bounds over the whole series: `(min, max)` as a degenerate
/// single-level support/resistance pair. `None` for an empty series.
pub fn calculate_support_resistance(prices: &[f64]) -> Option<(f64, f64)> {
    let first = *prices.first()?;
    let mut support = first;
    let mut resistance = first;

    for &price in prices {
        if price < support {
            support = price;
        }
        if price > resistance {
            resistance = price;
        }
    }
    Some((support, resistance))
}

/// Scans interior points left to right for local extrema.
///
/// An index is a support candidate when strictly below both neighbors, a
/// resistance candidate when strictly above both (plateaus never qualify).
/// A candidate is accepted only while its kind still has room and it clears
/// the previously accepted level of the same kind by [`TOLERANCE`], so
/// accepted supports are strictly decreasing and accepted resistances
/// strictly increasing. The scan breaks early once both kinds are full;
/// these are the first qualifying levels in scan order, not the most
/// extreme ones overall.
pub fn calculate_multiple_support_resistance(prices: &[f64]) -> LevelSet {
    let mut supports: Vec<f64> = Vec::new();
    let mut resistances: Vec<f64> = Vec::new();
    let mut last_support: Option<f64> = None;
    let mut last_resistance: Option<f64> = None;

    for i in 1..prices.len().saturating_sub(1) {
        let price = prices[i];

        if price < prices[i - 1] && price < prices[i + 1] {
            if supports.len() < MAX_LEVELS {
                let accepted = match last_support {
                    None => true,
                    Some(last) => price < last * (1.0 - TOLERANCE),
                };
                if accepted {
                    supports.push(price);
                    last_support = Some(price);
                }
            }
        } else if price > prices[i - 1] && price > prices[i + 1] {
            if resistances.len() < MAX_LEVELS {
                let accepted = match last_resistance {
                    None => true,
                    Some(last) => price > last * (1.0 + TOLERANCE),
                };
                if accepted {
                    resistances.push(price);
                    last_resistance = Some(price);
                }
            }
        }

        if supports.len() >= MAX_LEVELS && resistances.len() >= MAX_LEVELS {
            break;
        }
    }

    debug!(
        "identified {} supports, {} resistances",
        supports.len(),
        resistances.len()
    );
    LevelSet {
        supports,
        resistances,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn test_worked_scenario() {
        let prices = [10.0, 8.0, 12.0, 7.0, 15.0, 6.0, 20.0];
        let levels = calculate_multiple_support_resistance(&prices);

        assert_eq!(levels.supports, vec![8.0, 7.0, 6.0]);
        assert_eq!(levels.resistances, vec![12.0, 15.0]);
    }

    #[test]
    fn test_too_short_series() {
        assert_eq!(
            calculate_multiple_support_resistance(&[5.0, 5.0]),
            LevelSet::default()
        );
        assert_eq!(calculate_multiple_support_resistance(&[]), LevelSet::default());
        assert_eq!(
            calculate_multiple_support_resistance(&[7.0]),
            LevelSet::default()
        );
    }

    #[test]
    fn test_flat_series_has_no_levels() {
        let levels = calculate_multiple_support_resistance(&[5.0; 5]);
        assert!(levels.supports.is_empty());
        assert!(levels.resistances.is_empty());
    }

    #[test]
    fn test_monotonic_series_has_no_levels() {
        let ascending: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let levels = calculate_multiple_support_resistance(&ascending);
        assert!(levels.supports.is_empty());
        assert!(levels.resistances.is_empty());

        let descending: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
        let levels = calculate_multiple_support_resistance(&descending);
        assert!(levels.supports.is_empty());
        assert!(levels.resistances.is_empty());
    }

    #[test]
    fn test_tolerance_rejects_close_levels() {
        // Second dip at 7.9 is within 2% of 8.0 (8.0 * 0.98 = 7.84), so it
        // must be rejected; the third dip at 7.5 clears the margin.
        let prices = [10.0, 8.0, 12.0, 7.9, 12.0, 7.5, 12.0];
        let levels = calculate_multiple_support_resistance(&prices);
        assert_eq!(levels.supports, vec![8.0, 7.5]);
    }

    #[test]
    fn test_level_counts_capped_at_three() {
        // A widening sawtooth produces far more than 3 qualifying extrema.
        let mut prices = Vec::new();
        for i in 0..20 {
            prices.push(100.0 - 5.0 * i as f64);
            prices.push(100.0 + 5.0 * i as f64);
        }
        let levels = calculate_multiple_support_resistance(&prices);
        assert!(levels.supports.len() <= MAX_LEVELS);
        assert!(levels.resistances.len() <= MAX_LEVELS);
        assert_eq!(levels.supports.len(), 3);
        assert_eq!(levels.resistances.len(), 3);
    }

    #[test]
    fn test_accepted_levels_respect_ordering() {
        let mut prices = Vec::new();
        for i in 0..20 {
            prices.push(100.0 - 5.0 * i as f64);
            prices.push(100.0 + 5.0 * i as f64);
        }
        let levels = calculate_multiple_support_resistance(&prices);

        for pair in levels.supports.windows(2) {
            assert!(pair[1] < pair[0] * (1.0 - TOLERANCE));
        }
        for pair in levels.resistances.windows(2) {
            assert!(pair[1] > pair[0] * (1.0 + TOLERANCE));
        }
    }

    #[test]
    fn test_detector_is_pure() {
        let prices = [10.0, 8.0, 12.0, 7.0, 15.0, 6.0, 20.0];
        let first = calculate_multiple_support_resistance(&prices);
        let second = calculate_multiple_support_resistance(&prices);
        assert_eq!(first, second);
    }

    #[test]
    fn test_global_support_resistance() {
        let prices = [10.0, 8.0, 12.0, 7.0, 15.0, 6.0, 20.0];
        let (support, resistance) = calculate_support_resistance(&prices).unwrap();
        assert!(approx_eq!(f64, support, 6.0));
        assert!(approx_eq!(f64, resistance, 20.0));

        assert!(calculate_support_resistance(&[]).is_none());
    }
}
