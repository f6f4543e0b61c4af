// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicators used by the signal
// engine.  Every function returns a `Vec` (empty when the input is shorter
// than the window) so callers are forced to handle the "indicator
// unavailable" case before taking the latest value.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use ema::calculate_ema;
pub use macd::{calculate_default_macd, calculate_macd, MacdSeries};
pub use rsi::{calculate_rsi, RsiZone};
pub use sma::calculate_sma;
