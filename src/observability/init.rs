//! Subscriber setup: `tracing` macros → OpenTelemetry → trace file.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "showfinder";

/// Name of the trace file inside the data directory.
pub const TRACE_FILE: &str = "showfinder-otlp.json";

/// Installs the global subscriber.
///
/// The filter comes from `RUST_LOG` when set, then `config.trace_level`,
/// then `"info"`. A level of `"off"` skips installation entirely. Tracing is
/// best effort: if the data directory cannot be created nothing is installed,
/// and a second call is a no-op.
///
/// ```rust
/// use showfinder::observability::init_tracing;
/// use showfinder::Config;
///
/// init_tracing(&Config { trace_level: Some("off".to_string()), ..Config::default() });
/// ```
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.trace_level.as_deref().unwrap_or("info"))
    });
    if config.trace_level.as_deref() == Some("off") && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
