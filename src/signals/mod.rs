// =============================================================================
// Signals Module
// =============================================================================
//
// Signal pipeline for the engine:
// - Rule-based scoring of the latest indicator values
// - Orchestration from raw closes to a verdict with confidence

pub mod engine;
pub mod scoring;

pub use engine::{signal, SignalEngine};
pub use scoring::{score_latest, Scorecard};
