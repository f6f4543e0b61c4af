// =============================================================================
// Signal Engine — indicators in, verdict out
// =============================================================================
//
// Single-pass, stateless orchestration: compute the trend SMAs, RSI and MACD
// over the closes, take the latest value of each non-empty series, and run
// the scorer.  The engine holds only its configuration, so one instance can
// be shared across threads and every call is deterministic.
// =============================================================================

use tracing::{debug, warn};

use crate::error::SignalError;
use crate::indicators::{calculate_macd, calculate_rsi, calculate_sma};
use crate::runtime_config::{IndicatorParams, RuntimeConfig};
use crate::signals::scoring::{classify, confidence, score_latest};
use crate::types::{LatestIndicators, SignalResult};

/// Configured signal engine.
#[derive(Debug, Clone)]
pub struct SignalEngine {
    params: IndicatorParams,
    min_closes: usize,
    buy_threshold: f64,
    sell_threshold: f64,
}

impl SignalEngine {
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            params: config.indicator_params.clone(),
            min_closes: config.min_closes,
            buy_threshold: config.buy_threshold,
            sell_threshold: config.sell_threshold,
        }
    }

    pub fn min_closes(&self) -> usize {
        self.min_closes
    }

    /// Latest value of every indicator the scorer reads.
    ///
    /// A non-finite latest value (overflowed sums on extreme closes) counts as
    /// absent, so no rule fires on it and it serialises as `null`.
    pub fn latest_indicators(&self, closes: &[f64]) -> LatestIndicators {
        let p = &self.params;
        let macd = calculate_macd(
            closes,
            p.macd_fast_period,
            p.macd_slow_period,
            p.macd_signal_period,
        );
        let (macd_value, macd_signal) = macd
            .last()
            .filter(|(line, signal)| line.is_finite() && signal.is_finite())
            .unzip();

        LatestIndicators {
            sma20: latest_finite(&calculate_sma(closes, p.sma_fast_period)),
            sma50: latest_finite(&calculate_sma(closes, p.sma_slow_period)),
            rsi14: latest_finite(&calculate_rsi(closes, p.rsi_period)),
            macd: macd_value,
            macd_signal,
        }
    }

    /// Score `closes` (chronological) into a BUY / SELL / NEUTRAL verdict.
    ///
    /// Fails with [`SignalError::InsufficientData`] when fewer than
    /// `min_closes` values are given.
    pub fn evaluate(&self, closes: &[f64]) -> Result<SignalResult, SignalError> {
        if closes.len() < self.min_closes {
            warn!(
                got = closes.len(),
                required = self.min_closes,
                "signal rejected: insufficient data"
            );
            return Err(SignalError::InsufficientData {
                required: self.min_closes,
                actual: closes.len(),
            });
        }

        let latest = self.latest_indicators(closes);
        let card = score_latest(&latest);
        let verdict = classify(card.score, self.buy_threshold, self.sell_threshold);
        let confidence = confidence(card.score);

        debug!(
            closes = closes.len(),
            sma_fast = ?latest.sma20,
            sma_slow = ?latest.sma50,
            rsi = ?latest.rsi14,
            macd = ?latest.macd,
            macd_signal = ?latest.macd_signal,
            score = card.score,
            verdict = %verdict,
            confidence,
            "signal evaluated"
        );

        Ok(SignalResult {
            signal: verdict,
            confidence,
            score: card.score,
            latest,
            reasons: card.reasons,
        })
    }
}

fn latest_finite(series: &[f64]) -> Option<f64> {
    series.last().copied().filter(|v| v.is_finite())
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new(&RuntimeConfig::default())
    }
}

/// Evaluate `closes` with the stock SMA(20/50), RSI(14), MACD(12,26,9) setup
/// and the 60-close minimum.
pub fn signal(closes: &[f64]) -> Result<SignalResult, SignalError> {
    SignalEngine::default().evaluate(closes)
}
