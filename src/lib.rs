// =============================================================================
// GraphSense Signal — rule-based technical-indicator signal engine
// =============================================================================
//
// SMA, EMA, RSI and MACD over a chronological series of closing prices, a
// fixed-weight scorer that turns the latest values into BUY / SELL / NEUTRAL,
// and the JSON envelope used to carry the verdict across a boundary.
// =============================================================================

pub mod api;
pub mod error;
pub mod indicators;
pub mod runtime_config;
pub mod signals;
pub mod types;

pub use error::SignalError;
pub use runtime_config::{IndicatorParams, RuntimeConfig};
pub use signals::{signal, SignalEngine};
pub use types::{LatestIndicators, Reason, ResponseLocale, SignalResult, Verdict};
