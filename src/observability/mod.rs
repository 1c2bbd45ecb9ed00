//! Tracing with OTLP JSON spans written to a local file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → FileExporter → cinegrid-otlp.json
//! ```
//!
//! The trace file lives in `~/.local/share/zellij/cinegrid/` and rotates at
//! 10 MB, keeping three timestamped backups. Each line is one complete
//! `resourceSpans` document, so the file can be fed to any OTLP/JSON reader.
//!
//! The filter is taken from the `trace_level` plugin option and defaults to
//! `info`. Handler spans are named after the event (`otel.name`), fetch
//! lifecycle is logged at `debug`, and failures at `warn`.
//!
//! ```rust,no_run
//! use cinegrid::observability::init_tracing;
//! use cinegrid::Config;
//!
//! init_tracing(&Config { trace_level: Some("debug".into()), ..Config::default() });
//! tracing::debug!("tracing ready");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
