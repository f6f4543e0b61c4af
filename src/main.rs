// =============================================================================
// GraphSense Signal — Command-line Entry Point
// =============================================================================
//
//   graphsense-signal [REQUEST_PATH | -]     evaluate { "closes": [...] }
//   graphsense-signal init-config [PATH]     write the default config
//
// The response envelope goes to stdout; logs go to stderr.  An `ok: false`
// envelope is a normal result and exits 0.
// =============================================================================

use std::io::Read;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use graphsense_signal::api::{respond, SignalRequest};
use graphsense_signal::{ResponseLocale, RuntimeConfig, SignalEngine};

const DEFAULT_CONFIG_PATH: &str = "signal_config.json";

fn main() -> Result<()> {
    // ── 1. Environment & logging ─────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config_path =
        std::env::var("GRAPHSENSE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());

    if args.first().map(String::as_str) == Some("init-config") {
        let path = args.get(1).cloned().unwrap_or(config_path);
        return RuntimeConfig::default().save(&path);
    }

    // ── 2. Config ────────────────────────────────────────────────────────
    let mut config = RuntimeConfig::load(&config_path).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        RuntimeConfig::default()
    });

    if let Ok(locale) = std::env::var("GRAPHSENSE_LOCALE") {
        match locale.parse::<ResponseLocale>() {
            Ok(l) => config.response_locale = l,
            Err(e) => warn!(error = %e, "Ignoring GRAPHSENSE_LOCALE"),
        }
    }

    // ── 3. Request ───────────────────────────────────────────────────────
    let source = args.first().map(String::as_str).unwrap_or("-");
    let raw = read_request(source)?;
    let request: SignalRequest = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse signal request from {source}"))?;

    info!(
        source,
        closes = request.closes.len(),
        locale = %config.response_locale,
        "evaluating signal"
    );

    // ── 4. Evaluate & respond ────────────────────────────────────────────
    let engine = SignalEngine::new(&config);
    let body = respond(&engine, &request, config.response_locale);
    println!(
        "{}",
        serde_json::to_string_pretty(&body).context("failed to serialise response")?
    );

    Ok(())
}

fn read_request(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read signal request from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("failed to read signal request from {source}"))
    }
}
