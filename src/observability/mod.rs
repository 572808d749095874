//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: Traces written to `~/.local/share/zellij/orderdeck/orderdeck-otlp.json`
//! - **Automatic Rotation**: Files rotate at 10MB into `.1`, `.2`, `.3` backups
//! - **OTLP Format**: Standard OpenTelemetry Protocol JSON, one batch per line
//!
//! # Configuration
//!
//! The filter comes from the `trace_level` plugin option (default `"info"`).
//! Scrolling, filtering, and window recomputation emit `debug` spans and events.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - `tracer`: Tracer provider with the file span exporter
//! - `span_formatter`: OTLP JSON span serialization
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
pub mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, install, TRACE_FILE_NAME};
