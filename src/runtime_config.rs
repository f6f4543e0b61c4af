// =============================================================================
// Runtime Configuration — Engine settings with atomic save
// =============================================================================
//
// Every tunable parameter of the signal engine lives here.  The defaults are
// the classic SMA(20/50), RSI(14), MACD(12,26,9) set with a 60-close minimum,
// so an absent or empty config file reproduces the stock behaviour.
//
// Persistence uses an atomic tmp + rename pattern to prevent corruption on
// crash.  All fields carry `#[serde(default)]` so that adding new fields
// never breaks loading an older config file.
//
// =============================================================================

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::indicators::macd::{DEFAULT_MACD_FAST, DEFAULT_MACD_SIGNAL, DEFAULT_MACD_SLOW};
use crate::indicators::rsi::DEFAULT_RSI_PERIOD;
use crate::types::ResponseLocale;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_min_closes() -> usize {
    60
}

fn default_sma_fast_period() -> usize {
    20
}

fn default_sma_slow_period() -> usize {
    50
}

fn default_rsi_period() -> usize {
    DEFAULT_RSI_PERIOD
}

fn default_macd_fast_period() -> usize {
    DEFAULT_MACD_FAST
}

fn default_macd_slow_period() -> usize {
    DEFAULT_MACD_SLOW
}

fn default_macd_signal_period() -> usize {
    DEFAULT_MACD_SIGNAL
}

fn default_buy_threshold() -> f64 {
    2.0
}

fn default_sell_threshold() -> f64 {
    -2.0
}

// =============================================================================
// IndicatorParams
// =============================================================================

/// Look-back periods for every indicator the scorer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorParams {
    /// Short SMA window (reported as `sma20`).
    #[serde(default = "default_sma_fast_period")]
    pub sma_fast_period: usize,

    /// Long SMA window (reported as `sma50`).
    #[serde(default = "default_sma_slow_period")]
    pub sma_slow_period: usize,

    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,

    #[serde(default = "default_macd_fast_period")]
    pub macd_fast_period: usize,

    #[serde(default = "default_macd_slow_period")]
    pub macd_slow_period: usize,

    #[serde(default = "default_macd_signal_period")]
    pub macd_signal_period: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            sma_fast_period: default_sma_fast_period(),
            sma_slow_period: default_sma_slow_period(),
            rsi_period: default_rsi_period(),
            macd_fast_period: default_macd_fast_period(),
            macd_slow_period: default_macd_slow_period(),
            macd_signal_period: default_macd_signal_period(),
        }
    }
}

// =============================================================================
// RuntimeConfig
// =============================================================================

/// Top-level configuration for the signal engine and its response envelope.
///
/// Every field has a serde default so that older JSON files missing new fields
/// will still deserialise correctly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Fewer closes than this fails with "insufficient data".
    #[serde(default = "default_min_closes")]
    pub min_closes: usize,

    #[serde(default)]
    pub indicator_params: IndicatorParams,

    /// Score at or above which the verdict is BUY.
    #[serde(default = "default_buy_threshold")]
    pub buy_threshold: f64,

    /// Score at or below which the verdict is SELL.
    #[serde(default = "default_sell_threshold")]
    pub sell_threshold: f64,

    /// Field naming of the JSON response.
    #[serde(default)]
    pub response_locale: ResponseLocale,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            min_closes: default_min_closes(),
            indicator_params: IndicatorParams::default(),
            buy_threshold: default_buy_threshold(),
            sell_threshold: default_sell_threshold(),
            response_locale: ResponseLocale::default(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.  The loaded config is validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read runtime config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse runtime config from {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("invalid runtime config in {}", path.display()))?;

        info!(
            path = %path.display(),
            min_closes = config.min_closes,
            response_locale = %config.response_locale,
            "runtime config loaded"
        );

        Ok(config)
    }

    /// Persist the current configuration to `path` using an atomic write
    /// (write to `.tmp`, then rename).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = serde_json::to_string_pretty(self)
            .context("failed to serialise runtime config to JSON")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "runtime config saved (atomic)");
        Ok(())
    }

    /// Reject parameter combinations the indicators cannot honour.
    pub fn validate(&self) -> Result<()> {
        let p = &self.indicator_params;

        let periods = [
            ("sma_fast_period", p.sma_fast_period),
            ("sma_slow_period", p.sma_slow_period),
            ("rsi_period", p.rsi_period),
            ("macd_fast_period", p.macd_fast_period),
            ("macd_slow_period", p.macd_slow_period),
            ("macd_signal_period", p.macd_signal_period),
        ];
        if let Some((name, _)) = periods.iter().find(|(_, period)| *period == 0) {
            bail!("{name} must be at least 1");
        }

        if p.sma_fast_period >= p.sma_slow_period {
            bail!(
                "sma_fast_period ({}) must be less than sma_slow_period ({})",
                p.sma_fast_period,
                p.sma_slow_period
            );
        }
        if p.macd_fast_period >= p.macd_slow_period {
            bail!(
                "macd_fast_period ({}) must be less than macd_slow_period ({})",
                p.macd_fast_period,
                p.macd_slow_period
            );
        }
        if !self.buy_threshold.is_finite() || !self.sell_threshold.is_finite() {
            bail!("score thresholds must be finite");
        }
        if self.sell_threshold >= self.buy_threshold {
            bail!(
                "sell_threshold ({}) must be below buy_threshold ({})",
                self.sell_threshold,
                self.buy_threshold
            );
        }

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("graphsense-{}-{name}", std::process::id()))
    }

    #[test]
    fn default_config_has_expected_values() {
        let cfg = RuntimeConfig::default();
        assert_eq!(cfg.min_closes, 60);
        assert_eq!(cfg.indicator_params.sma_fast_period, 20);
        assert_eq!(cfg.indicator_params.sma_slow_period, 50);
        assert_eq!(cfg.indicator_params.rsi_period, 14);
        assert_eq!(cfg.indicator_params.macd_fast_period, 12);
        assert_eq!(cfg.indicator_params.macd_slow_period, 26);
        assert_eq!(cfg.indicator_params.macd_signal_period, 9);
        assert!((cfg.buy_threshold - 2.0).abs() < f64::EPSILON);
        assert!((cfg.sell_threshold + 2.0).abs() < f64::EPSILON);
        assert_eq!(cfg.response_locale, ResponseLocale::En);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn deserialise_empty_json_uses_defaults() {
        let cfg: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, RuntimeConfig::default());
    }

    #[test]
    fn deserialise_partial_json_fills_defaults() {
        let json = r#"{ "response_locale": "pt", "indicator_params": { "rsi_period": 7 } }"#;
        let cfg: RuntimeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.response_locale, ResponseLocale::Pt);
        assert_eq!(cfg.indicator_params.rsi_period, 7);
        assert_eq!(cfg.indicator_params.sma_slow_period, 50);
        assert_eq!(cfg.min_closes, 60);
    }

    #[test]
    fn validate_rejects_zero_period() {
        let mut cfg = RuntimeConfig::default();
        cfg.indicator_params.rsi_period = 0;
        let err = cfg.validate().unwrap_err().to_string();
        assert!(err.contains("rsi_period"), "{err}");
    }

    #[test]
    fn validate_rejects_inverted_windows() {
        let mut cfg = RuntimeConfig::default();
        cfg.indicator_params.sma_fast_period = 50;
        assert!(cfg.validate().is_err());

        let mut cfg = RuntimeConfig::default();
        cfg.indicator_params.macd_fast_period = 30;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_crossed_thresholds() {
        let cfg = RuntimeConfig {
            buy_threshold: -1.0,
            sell_threshold: 1.0,
            ..RuntimeConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let path = scratch_path("roundtrip.json");
        let cfg = RuntimeConfig {
            min_closes: 80,
            response_locale: ResponseLocale::Pt,
            ..RuntimeConfig::default()
        };
        cfg.save(&path).unwrap();
        let loaded = RuntimeConfig::load(&path).unwrap();
        assert_eq!(loaded, cfg);
        assert!(!path.with_extension("json.tmp").exists());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(RuntimeConfig::load(scratch_path("does-not-exist.json")).is_err());
    }

    #[test]
    fn load_rejects_invalid_values() {
        let path = scratch_path("invalid.json");
        std::fs::write(&path, r#"{ "indicator_params": { "macd_slow_period": 0 } }"#).unwrap();
        assert!(RuntimeConfig::load(&path).is_err());
        std::fs::remove_file(&path).unwrap();
    }
}
