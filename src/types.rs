// =============================================================================
// Shared types used across the signal engine
// =============================================================================

use serde::{Deserialize, Serialize};

/// Discrete verdict produced by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Buy,
    Sell,
    Neutral,
}

impl Default for Verdict {
    fn default() -> Self {
        Self::Neutral
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
            Self::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// Field naming used by the JSON response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseLocale {
    En,
    Pt,
}

impl Default for ResponseLocale {
    fn default() -> Self {
        Self::En
    }
}

impl std::fmt::Display for ResponseLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Pt => write!(f, "pt"),
        }
    }
}

impl std::str::FromStr for ResponseLocale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "pt" | "pt-br" | "pt_br" => Ok(Self::Pt),
            other => anyhow::bail!("unknown response locale '{other}'. Use 'en' or 'pt'."),
        }
    }
}

/// One scoring rule that fired, in the order it was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    Uptrend,
    Downtrend,
    HealthyRsi,
    Overbought,
    Oversold,
    NeutralRsi,
    BullishMomentum,
    BearishMomentum,
}

impl Reason {
    /// Human-readable text for the given locale.
    pub fn label(self, locale: ResponseLocale) -> &'static str {
        match locale {
            ResponseLocale::En => match self {
                Self::Uptrend => "uptrend",
                Self::Downtrend => "downtrend",
                Self::HealthyRsi => "healthy RSI",
                Self::Overbought => "overbought",
                Self::Oversold => "oversold",
                Self::NeutralRsi => "neutral RSI",
                Self::BullishMomentum => "bullish momentum",
                Self::BearishMomentum => "bearish momentum",
            },
            ResponseLocale::Pt => match self {
                Self::Uptrend => "tendência de alta",
                Self::Downtrend => "tendência de baixa",
                Self::HealthyRsi => "RSI saudável",
                Self::Overbought => "sobrecomprado",
                Self::Oversold => "sobrevendido",
                Self::NeutralRsi => "RSI neutro",
                Self::BullishMomentum => "momentum de alta",
                Self::BearishMomentum => "momentum de baixa",
            },
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label(ResponseLocale::En))
    }
}

/// Latest value of each indicator, `None` when the series was empty or its
/// latest value is not finite.
///
/// Absence is explicit: an indicator that evaluates to `0.0` is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LatestIndicators {
    pub sma20: Option<f64>,
    pub sma50: Option<f64>,
    pub rsi14: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
}

/// Outcome of one `signal` evaluation.  Computed fresh per call.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalResult {
    pub signal: Verdict,
    /// 0..=100
    pub confidence: u8,
    pub score: f64,
    pub latest: LatestIndicators,
    pub reasons: Vec<Reason>,
}
