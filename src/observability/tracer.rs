//! Span exporter that appends OTLP JSON lines to a rotating local file.

use super::file_writer::RotatingFile;
use super::span_formatter::OtlpJsonEncoder;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Writes each exported batch as one JSON line.
///
/// The plugin sandbox has no collector to talk to, so spans stay on disk and
/// are picked up later by whatever reads OTLP files.
struct FileExporter {
    file: RotatingFile,
    encoder: OtlpJsonEncoder,
    stopped: AtomicBool,
}

impl FileExporter {
    const fn new(path: PathBuf, resource: Resource, scope: &'static str) -> Self {
        Self {
            file: RotatingFile::new(path),
            encoder: OtlpJsonEncoder::new(resource, scope),
            stopped: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.stopped.load(Ordering::SeqCst) {
            return Err(TraceError::from("trace file exporter already shut down"));
        }
        let line = self.encoder.encode(batch).to_string();
        self.file
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    // Resource is fixed at construction.
    fn set_resource(&mut self, _resource: &Resource) {}
}

impl std::fmt::Debug for FileExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileExporter")
            .field("file", &self.file)
            .field("encoder", &self.encoder)
            .field("stopped", &self.stopped)
            .finish()
    }
}

/// Tracer provider that exports every finished span synchronously to `path`.
///
/// ```rust,ignore
/// let resource = Resource::new(vec![KeyValue::new("service.name", "Cinegrid")]);
/// let provider = file_tracer_provider(PathBuf::from("/tmp/cinegrid-otlp.json"), resource, "Cinegrid");
/// ```
pub fn file_tracer_provider(path: PathBuf, resource: Resource, scope: &'static str) -> TracerProvider {
    let exporter = FileExporter::new(path, resource.clone(), scope);

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::KeyValue;

    #[test]
    fn export_after_shutdown_fails() {
        let dir = tempfile::tempdir().unwrap();
        let resource = Resource::new(vec![KeyValue::new("service.name", "Cinegrid")]);
        let mut exporter = FileExporter::new(dir.path().join("t.json"), resource, "Cinegrid");

        assert!(exporter.write_batch(&[]).is_ok());
        exporter.shutdown();
        assert!(exporter.write_batch(&[]).is_err());
    }

    #[test]
    fn each_batch_is_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.json");
        let resource = Resource::new(vec![KeyValue::new("service.name", "Cinegrid")]);
        let exporter = FileExporter::new(path.clone(), resource, "Cinegrid");

        exporter.write_batch(&[]).unwrap();
        exporter.write_batch(&[]).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written.lines().count(), 2);
        for line in written.lines() {
            let doc: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(doc["resourceSpans"][0]["scopeSpans"][0]["scope"]["name"], "Cinegrid");
        }
    }
}
