// =============================================================================
// Rule-based Scorer — fixed-weight trend / RSI / momentum heuristic
// =============================================================================
//
// Rules run in a fixed order over the latest indicator values, each one that
// fires adding its weight to a running score and appending a reason:
//
//   1. trend     SMA fast > SMA slow          +1   else  -1
//   2. RSI       50 < RSI < 70                +1
//                RSI >= 70                    -0.5
//                RSI <= 30                    +0.5
//                otherwise                     0
//   3. momentum  MACD > signal                +1   else  -1
//
// A rule whose inputs are absent is skipped entirely (no reason, no weight).
// =============================================================================

use crate::indicators::RsiZone;
use crate::types::{LatestIndicators, Reason, Verdict};

/// Running score plus the ordered reasons behind it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scorecard {
    pub score: f64,
    pub reasons: Vec<Reason>,
}

impl Scorecard {
    fn add(&mut self, weight: f64, reason: Reason) {
        self.score += weight;
        self.reasons.push(reason);
    }
}

/// Apply the three rules to `latest` in order.
pub fn score_latest(latest: &LatestIndicators) -> Scorecard {
    let mut card = Scorecard::default();

    if let (Some(fast), Some(slow)) = (latest.sma20, latest.sma50) {
        if fast > slow {
            card.add(1.0, Reason::Uptrend);
        } else {
            card.add(-1.0, Reason::Downtrend);
        }
    }

    if let Some(rsi) = latest.rsi14 {
        match RsiZone::classify(rsi) {
            RsiZone::Healthy => card.add(1.0, Reason::HealthyRsi),
            RsiZone::Overbought => card.add(-0.5, Reason::Overbought),
            RsiZone::Oversold => card.add(0.5, Reason::Oversold),
            RsiZone::Neutral => card.add(0.0, Reason::NeutralRsi),
        }
    }

    if let (Some(macd), Some(signal)) = (latest.macd, latest.macd_signal) {
        if macd > signal {
            card.add(1.0, Reason::BullishMomentum);
        } else {
            card.add(-1.0, Reason::BearishMomentum);
        }
    }

    card
}

/// `score >= buy` → BUY, `score <= sell` → SELL, else NEUTRAL.
pub fn classify(score: f64, buy_threshold: f64, sell_threshold: f64) -> Verdict {
    if score >= buy_threshold {
        Verdict::Buy
    } else if score <= sell_threshold {
        Verdict::Sell
    } else {
        Verdict::Neutral
    }
}

/// `floor(clamp((score + 2) * 25, 0, 100))`.
pub fn confidence(score: f64) -> u8 {
    ((score + 2.0) * 25.0).clamp(0.0, 100.0).floor() as u8
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn latest(
        sma: Option<(f64, f64)>,
        rsi: Option<f64>,
        macd: Option<(f64, f64)>,
    ) -> LatestIndicators {
        LatestIndicators {
            sma20: sma.map(|s| s.0),
            sma50: sma.map(|s| s.1),
            rsi14: rsi,
            macd: macd.map(|m| m.0),
            macd_signal: macd.map(|m| m.1),
        }
    }

    #[test]
    fn all_bullish_rules() {
        let card = score_latest(&latest(Some((110.0, 100.0)), Some(60.0), Some((1.0, 0.5))));
        assert_eq!(card.score, 3.0);
        assert_eq!(
            card.reasons,
            vec![Reason::Uptrend, Reason::HealthyRsi, Reason::BullishMomentum]
        );
    }

    #[test]
    fn equal_smas_count_as_downtrend() {
        let card = score_latest(&latest(Some((100.0, 100.0)), None, None));
        assert_eq!(card.score, -1.0);
        assert_eq!(card.reasons, vec![Reason::Downtrend]);
    }

    #[test]
    fn equal_macd_and_signal_count_as_bearish() {
        let card = score_latest(&latest(None, None, Some((0.0, 0.0))));
        assert_eq!(card.score, -1.0);
        assert_eq!(card.reasons, vec![Reason::BearishMomentum]);
    }

    #[test]
    fn rsi_weights_at_boundaries() {
        let cases = [
            (50.0, 0.0, Reason::NeutralRsi),
            (40.0, 0.0, Reason::NeutralRsi),
            (55.0, 1.0, Reason::HealthyRsi),
            (70.0, -0.5, Reason::Overbought),
            (85.0, -0.5, Reason::Overbought),
            (30.0, 0.5, Reason::Oversold),
            (12.0, 0.5, Reason::Oversold),
        ];
        for (rsi, weight, reason) in cases {
            let card = score_latest(&latest(None, Some(rsi), None));
            assert_eq!(card.score, weight, "rsi {rsi}");
            assert_eq!(card.reasons, vec![reason], "rsi {rsi}");
        }
    }

    #[test]
    fn zero_valued_indicators_are_present() {
        // A MACD of exactly 0.0 above a negative signal is still bullish.
        let card = score_latest(&latest(None, None, Some((0.0, -0.1))));
        assert_eq!(card.reasons, vec![Reason::BullishMomentum]);
    }

    #[test]
    fn absent_indicators_skip_rules() {
        let card = score_latest(&LatestIndicators::default());
        assert_eq!(card.score, 0.0);
        assert!(card.reasons.is_empty());

        // Half a pair is as good as none.
        let partial = LatestIndicators {
            sma20: Some(1.0),
            macd_signal: Some(1.0),
            ..Default::default()
        };
        assert!(score_latest(&partial).reasons.is_empty());
    }

    #[test]
    fn classify_thresholds_are_inclusive() {
        assert_eq!(classify(2.0, 2.0, -2.0), Verdict::Buy);
        assert_eq!(classify(1.5, 2.0, -2.0), Verdict::Neutral);
        assert_eq!(classify(-2.0, 2.0, -2.0), Verdict::Sell);
        assert_eq!(classify(-1.5, 2.0, -2.0), Verdict::Neutral);
    }

    #[test]
    fn confidence_is_clamped_and_floored() {
        assert_eq!(confidence(3.0), 100);
        assert_eq!(confidence(2.0), 100);
        assert_eq!(confidence(1.5), 87);
        assert_eq!(confidence(0.0), 50);
        assert_eq!(confidence(-0.5), 37);
        assert_eq!(confidence(-1.5), 12);
        assert_eq!(confidence(-2.0), 0);
        assert_eq!(confidence(-2.5), 0);
    }
}
