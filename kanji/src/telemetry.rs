use opentelemetry::InstrumentationScope;
use opentelemetry::trace::TracerProvider;
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::Error;
use crate::config::{LogFormat, TracingConfig};

/// Flushes exported spans when dropped.
///
/// Keep this alive until the program is about to exit.
#[must_use]
pub struct TracingGuard {
    provider: Option<SdkTracerProvider>,
}

impl Drop for TracingGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take()
            && let Err(err) = provider.shutdown()
        {
            warn!(%err, "could not flush spans");
        }
    }
}

fn tracer_provider() -> Result<SdkTracerProvider, Error> {
    let otlp_exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_http()
        .build()
        .map_err(|err| Error::Tracing(format!("building otlp http exporter failed: {err}")))?;

    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(otlp_exporter)
        .with_resource(
            Resource::builder()
                .with_service_name(env!("CARGO_PKG_NAME"))
                .build(),
        )
        .build();

    Ok(provider)
}

/// Returns the log filter, preferring `RUST_LOG` over the configured directives.
fn env_filter(tracing: &TracingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&tracing.filter))
}

/// Installs the global subscriber.
///
/// Log lines go to stderr so they never mix with results on stdout. When `tracing.enabled` is
/// set, spans are also exported over OTLP/HTTP.
///
/// # Errors
///
/// Returns [`Error::Tracing`] if the exporter cannot be built or a global subscriber is already
/// installed.
pub fn try_init(tracing: &TracingConfig) -> Result<TracingGuard, Error> {
    let provider = if tracing.enabled {
        Some(tracer_provider()?)
    } else {
        None
    };

    let telemetry_layer = provider.as_ref().map(|provider| {
        let scope = InstrumentationScope::builder(env!("CARGO_PKG_NAME"))
            .with_version(env!("CARGO_PKG_VERSION"))
            .with_schema_url("https://opentelemetry.io/schema/1.0.0")
            .build();
        let tracer = provider.tracer_with_scope(scope);

        tracing_opentelemetry::layer().with_tracer(tracer)
    });

    let stderr_layer = match tracing.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter(tracing))
        .with(telemetry_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|err| Error::Tracing(err.to_string()))?;

    debug!(otlp = tracing.enabled, format = ?tracing.format, "tracing initialized");

    Ok(TracingGuard { provider })
}
