// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1 — Compute price changes (deltas) from consecutive closes.
// Step 2 — Seed average gain / average loss with the mean of the first
//          `period` gains / losses.
// Step 3 — Apply Wilder's smoothing:
//            avg_gain = (prev_avg_gain * (period - 1) + current_gain) / period
//            avg_loss = (prev_avg_loss * (period - 1) + current_loss) / period
// Step 4 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// A zero average loss means RS is infinite, so RSI is 100.  That holds for a
// perfectly flat window too (no gains either).
// =============================================================================

/// Default RSI look-back.
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Compute the full RSI series for the given `closes` and `period`.
///
/// The returned vector has one RSI value for each close starting at index
/// `period` (the first `period` deltas seed the averages), i.e.
/// `closes.len() - period` values.
///
/// # Edge cases
/// - `period == 0` => empty vec
/// - `closes.len() < period + 1` => empty vec (need at least `period` deltas)
/// - Average loss of zero => 100.0
pub fn calculate_rsi(closes: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || closes.len() < period + 1 {
        return Vec::new();
    }

    // --- Compute price deltas ------------------------------------------------
    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();

    // --- Seed averages with the mean of the first `period` deltas ------------
    let period_f = period as f64;
    let mut avg_gain = deltas[..period].iter().map(|&d| gain(d)).sum::<f64>() / period_f;
    let mut avg_loss = deltas[..period].iter().map(|&d| loss(d)).sum::<f64>() / period_f;

    let mut result = Vec::with_capacity(deltas.len() - period + 1);
    result.push(rsi_from_averages(avg_gain, avg_loss));

    // --- Wilder's smoothing for subsequent values ----------------------------
    for &delta in &deltas[period..] {
        avg_gain = (avg_gain * (period_f - 1.0) + gain(delta)) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + loss(delta)) / period_f;
        result.push(rsi_from_averages(avg_gain, avg_loss));
    }

    result
}

/// Band an RSI reading falls into, as used by the signal scorer.
///
/// The checks run in a fixed order with strict/inclusive operators exactly as
/// below, so 50.0 and everything in (30, 50) is `Neutral`, 70.0 is
/// `Overbought` and 30.0 is `Oversold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsiZone {
    /// 50 < RSI < 70
    Healthy,
    /// RSI >= 70
    Overbought,
    /// RSI <= 30
    Oversold,
    Neutral,
}

impl RsiZone {
    pub fn classify(rsi: f64) -> Self {
        if rsi > 50.0 && rsi < 70.0 {
            Self::Healthy
        } else if rsi >= 70.0 {
            Self::Overbought
        } else if rsi <= 30.0 {
            Self::Oversold
        } else {
            Self::Neutral
        }
    }
}

// =============================================================================
// Internal helpers
// =============================================================================

fn gain(delta: f64) -> f64 {
    if delta > 0.0 {
        delta
    } else {
        0.0
    }
}

fn loss(delta: f64) -> f64 {
    if delta < 0.0 {
        -delta
    } else {
        0.0
    }
}

/// Convert average gain / average loss into an RSI value in [0, 100].
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}
