//! Error types for the signal engine

use thiserror::Error;

/// Failure modes of [`crate::signals::SignalEngine::evaluate`].
///
/// Indicator functions never fail; they return empty series instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// Fewer closes than the engine's minimum window.
    #[error("insufficient data: need at least {required} closes, got {actual}")]
    InsufficientData { required: usize, actual: usize },
}
