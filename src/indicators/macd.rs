// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
//   MACD line   = EMA(fast) - EMA(slow)
//   Signal line = EMA(MACD line, signal)
//
// EMA(fast) starts `slow - fast` positions earlier than EMA(slow), so the two
// are aligned on their common trailing positions before subtracting.  The
// MACD line is then trimmed from the front so both returned series end on the
// same close and have equal length.
// =============================================================================

use super::ema::calculate_ema;

pub const DEFAULT_MACD_FAST: usize = 12;
pub const DEFAULT_MACD_SLOW: usize = 26;
pub const DEFAULT_MACD_SIGNAL: usize = 9;

/// End-aligned MACD output.  `line[i]` and `signal[i]` refer to the same close.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MacdSeries {
    pub line: Vec<f64>,
    pub signal: Vec<f64>,
}

impl MacdSeries {
    pub fn is_empty(&self) -> bool {
        self.signal.is_empty()
    }

    /// Latest `(macd, signal)` pair, if any.
    pub fn last(&self) -> Option<(f64, f64)> {
        Some((*self.line.last()?, *self.signal.last()?))
    }
}

/// Compute MACD with the given fast / slow / signal periods.
///
/// Returns an empty [`MacdSeries`] when `closes.len() < slow + signal` or when
/// any period is zero.  Otherwise both series have
/// `closes.len() - slow - signal + 2` values.
pub fn calculate_macd(closes: &[f64], fast: usize, slow: usize, signal: usize) -> MacdSeries {
    if fast == 0 || slow == 0 || signal == 0 || closes.len() < slow + signal {
        return MacdSeries::default();
    }

    let ema_fast = calculate_ema(closes, fast);
    let ema_slow = calculate_ema(closes, slow);

    // `fast > slow` makes the fast EMA the shorter one; nothing to align.
    let Some(offset) = ema_fast.len().checked_sub(ema_slow.len()) else {
        return MacdSeries::default();
    };

    let mut line: Vec<f64> = ema_slow
        .iter()
        .enumerate()
        .map(|(i, slow_value)| ema_fast[i + offset] - slow_value)
        .collect();

    let signal_line = calculate_ema(&line, signal);
    let warmup = line.len() - signal_line.len();
    line.drain(..warmup);

    MacdSeries {
        line,
        signal: signal_line,
    }
}

/// MACD(12, 26, 9).
pub fn calculate_default_macd(closes: &[f64]) -> MacdSeries {
    calculate_macd(closes, DEFAULT_MACD_FAST, DEFAULT_MACD_SLOW, DEFAULT_MACD_SIGNAL)
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn ascending(n: usize) -> Vec<f64> {
        (0..n).map(|i| 100.0 + i as f64).collect()
    }

    #[test]
    fn macd_insufficient_data() {
        let macd = calculate_default_macd(&ascending(34));
        assert!(macd.line.is_empty());
        assert!(macd.signal.is_empty());
        assert!(macd.last().is_none());
    }

    #[test]
    fn macd_minimum_length() {
        let macd = calculate_default_macd(&ascending(35));
        assert_eq!(macd.line.len(), 2);
        assert_eq!(macd.signal.len(), 2);
    }

    #[test]
    fn macd_line_matches_ema_difference() {
        let closes: Vec<f64> = (0..80)
            .map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0 + i as f64 * 0.1)
            .collect();
        let macd = calculate_default_macd(&closes);
        let ema_fast = calculate_ema(&closes, 12);
        let ema_slow = calculate_ema(&closes, 26);

        // Last values are aligned on the final close.
        let (line, _) = macd.last().unwrap();
        assert_relative_eq!(
            line,
            ema_fast.last().unwrap() - ema_slow.last().unwrap(),
            epsilon = 1e-12
        );

        let signal = calculate_ema(
            &ema_slow
                .iter()
                .enumerate()
                .map(|(i, s)| ema_fast[i + 14] - s)
                .collect::<Vec<_>>(),
            9,
        );
        assert_eq!(macd.signal, signal);
    }

    #[test]
    fn macd_linear_ramp_converges_to_lag_difference() {
        // Seeded EMAs of a unit ramp lag by (p - 1) / 2, so the line is 12.5 - 5.5.
        let macd = calculate_default_macd(&ascending(60));
        for &v in &macd.line {
            assert_relative_eq!(v, 7.0, epsilon = 1e-9);
        }
        for &v in &macd.signal {
            assert_relative_eq!(v, 7.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn macd_flat_series_is_zero() {
        let macd = calculate_default_macd(&[100.0; 60]);
        assert_eq!(macd.last(), Some((0.0, 0.0)));
    }

    #[test]
    fn macd_fast_not_faster_than_slow_is_empty() {
        assert!(calculate_macd(&ascending(100), 26, 12, 9).is_empty());
    }

    proptest! {
        #[test]
        fn macd_series_are_aligned(closes in prop::collection::vec(1.0f64..1_000.0, 0..150)) {
            let macd = calculate_default_macd(&closes);
            prop_assert_eq!(macd.line.len(), macd.signal.len());
            if closes.len() >= 35 {
                prop_assert_eq!(macd.line.len(), closes.len() - 26 - 9 + 2);
            } else {
                prop_assert!(macd.line.is_empty());
            }
        }
    }
}
