//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Spans land in `$XDG_DATA_HOME/showfinder/showfinder-otlp.json` (falling back
//! to `~/.local/share/showfinder/`), one OTLP document per line. The file
//! rotates at 10 MB and keeps 3 backups.
//!
//! # Configuration
//!
//! The filter is taken from, in order:
//! 1. `RUST_LOG`
//! 2. `trace_level` in the config file or `--trace-level`
//! 3. `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider with the file exporter
//! - [`span_formatter`]: OTLP JSON serialization
//! - [`file_writer`]: Size-rotated file writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE};
