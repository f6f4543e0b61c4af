// =============================================================================
// API Module
// =============================================================================
//
// JSON contract between the signal engine and whatever boundary carries it.

pub mod envelope;

pub use envelope::{render_failure, render_success, respond, SignalRequest};
