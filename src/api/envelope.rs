// =============================================================================
// JSON Envelope — request parsing and response rendering
// =============================================================================
//
// Request:   { "closes": [f64, ...] }
// Success:   { "ok": true,  "signal", "confidence", "score", "latest", "reasons" }
// Failure:   { "ok": false, "error": "insufficient data: ..." }
//
// Engine errors never escape as errors here; they become `ok: false` bodies.
// The `pt` locale renames the fields (sinal / confianca / ultimos / motivos /
// erro) and translates the reason strings; verdict values are the same.
// =============================================================================

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::SignalError;
use crate::signals::SignalEngine;
use crate::types::{ResponseLocale, SignalResult};

/// Body accepted by the signal boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct SignalRequest {
    pub closes: Vec<f64>,
}

/// Evaluate `request` and render the envelope, success or failure.
pub fn respond(engine: &SignalEngine, request: &SignalRequest, locale: ResponseLocale) -> Value {
    match engine.evaluate(&request.closes) {
        Ok(result) => render_success(&result, locale),
        Err(e) => render_failure(&e, locale),
    }
}

pub fn render_success(result: &SignalResult, locale: ResponseLocale) -> Value {
    let latest = json!(result.latest);
    let reasons: Vec<&str> = result.reasons.iter().map(|r| r.label(locale)).collect();

    match locale {
        ResponseLocale::En => json!({
            "ok": true,
            "signal": result.signal,
            "confidence": result.confidence,
            "score": result.score,
            "latest": latest,
            "reasons": reasons,
        }),
        ResponseLocale::Pt => json!({
            "ok": true,
            "sinal": result.signal,
            "confianca": result.confidence,
            "score": result.score,
            "ultimos": latest,
            "motivos": reasons,
        }),
    }
}

pub fn render_failure(error: &SignalError, locale: ResponseLocale) -> Value {
    let key = match locale {
        ResponseLocale::En => "error",
        ResponseLocale::Pt => "erro",
    };
    let mut body = json!({ "ok": false });
    if let Some(obj) = body.as_object_mut() {
        obj.insert(key.to_string(), Value::String(error.to_string()));
    }
    body
}
