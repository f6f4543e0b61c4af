// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// Unweighted mean over a fixed trailing window.  Computed with a running
// window sum so the whole series costs O(n) instead of O(n * period):
//
//   sum_0 = closes[0] + ... + closes[period - 1]
//   sum_t = sum_{t-1} + closes[t + period - 1] - closes[t - 1]
//   SMA_t = sum_t / period
// =============================================================================

/// Compute the SMA series for `closes` over a trailing window of `period`.
///
/// Output element `i` is the mean of `closes[i..i + period]`, so the series
/// has `closes.len() - period + 1` values.
///
/// # Edge cases
/// - `period == 0` => empty vec
/// - `closes.len() < period` => empty vec
pub fn calculate_sma(closes: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || closes.len() < period {
        return Vec::new();
    }

    let period_f = period as f64;
    let mut window_sum: f64 = closes[..period].iter().sum();

    let mut result = Vec::with_capacity(closes.len() - period + 1);
    result.push(window_sum / period_f);

    for (entering, leaving) in closes[period..].iter().zip(closes.iter()) {
        window_sum += entering - leaving;
        result.push(window_sum / period_f);
    }

    result
}
