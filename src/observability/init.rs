//! Tracing initialization and subscriber setup.
//!
//! Wires the pipeline from `tracing` macros, through an `EnvFilter` and the
//! `tracing-opentelemetry` layer, to the rotating OTLP trace file.

use super::tracer;
use crate::domain::error::Result;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use std::path::Path;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Trace file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "orderdeck-otlp.json";

/// Filter used when `trace_level` is not configured.
const DEFAULT_LEVEL: &str = "info";

/// Initializes the global tracing subscriber with file-based OTLP export.
///
/// Traces go to `~/.local/share/zellij/orderdeck/orderdeck-otlp.json` (seen
/// from the sandbox as `/host/.local/share/zellij/orderdeck`). Tracing is
/// optional: if the directory cannot be created the plugin runs without it.
/// Only the first call installs a subscriber.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let _ = install(&crate::infrastructure::get_data_dir(), level);
}

/// Installs the subscriber, writing traces under `data_dir`.
///
/// `level` accepts any `EnvFilter` directive, e.g. `debug` or
/// `orderdeck::virtual_list=trace,info`.
///
/// # Errors
///
/// Returns [`crate::OrderdeckError::Io`] if `data_dir` cannot be created.
pub fn install(data_dir: &Path, level: &str) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", env!("CARGO_PKG_NAME")),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(tracer::SCOPE));

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();

    Ok(())
}
