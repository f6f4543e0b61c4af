// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// Formula:
//   k     = 2 / (period + 1)
//   EMA_t = close_t * k + EMA_{t-1} * (1 - k)
//
// The very first EMA value is seeded with the mean of the first `period`
// closes.  MACD also runs this over its own output, so the input is any
// series, not just closes.
// =============================================================================

/// Compute the EMA series for `series` with look-back `period`.
///
/// Returns an empty `Vec` when the input is too short or the period is zero.
/// Each output element corresponds to an input element starting at index
/// `period - 1`, so the series has `series.len() - period + 1` values.
pub fn calculate_ema(series: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || series.len() < period {
        return Vec::new();
    }

    let k = 2.0 / (period + 1) as f64;

    // Seed: mean of the first `period` values.
    let seed: f64 = series[..period].iter().sum::<f64>() / period as f64;

    let mut result = Vec::with_capacity(series.len() - period + 1);
    result.push(seed);

    let mut prev = seed;
    for &value in &series[period..] {
        let ema = value * k + prev * (1.0 - k);
        result.push(ema);
        prev = ema;
    }

    result
}
