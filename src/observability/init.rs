//! Global subscriber setup.

use super::tracer::file_tracer_provider;
use crate::domain::error::{CinegridError, Result};
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::Path;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "Cinegrid";
const TRACE_FILE: &str = "cinegrid-otlp.json";
const DEFAULT_LEVEL: &str = "info";

/// Installs the file-exporting subscriber for the plugin.
///
/// The filter comes from `trace_level` (any `EnvFilter` directive, e.g.
/// `"cinegrid=debug"`), defaulting to `info`. Spans land in
/// `cinegrid-otlp.json` under [`paths::data_dir`].
///
/// Tracing is optional: if the data directory cannot be created the plugin
/// simply runs without it. Calling this twice keeps the first subscriber.
pub fn init_tracing(config: &Config) {
    let directive = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let _ = install(&paths::data_dir(), directive);
}

/// Builds the pipeline writing to `dir` and registers it globally.
///
/// # Errors
///
/// Returns [`CinegridError::Io`] if `dir` cannot be created.
fn install(dir: &Path, directive: &str) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(CinegridError::Io)?;

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = file_tracer_provider(dir.join(TRACE_FILE), resource, SERVICE_NAME);
    let layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    // Already-set subscriber is fine.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_trace_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("nested").join("cinegrid");

        install(&dir, "not a == valid directive").unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn unwritable_directory_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        let err = install(&blocker.join("sub"), "info").unwrap_err();
        assert!(matches!(err, CinegridError::Io(_)));
    }
}
