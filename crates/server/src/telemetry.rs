use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::tonic_types::metadata::MetadataMap;
use opentelemetry_otlp::{WithExportConfig, WithTonicConfig};
use std::{
    future::Future,
    pin::Pin,
    task::{Context as TaskContext, Poll},
};
use thiserror::Error;
use tower::{Layer, Service};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const TRACER_NAME: &str = "breakeven";

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("SIGNOZ_INGESTION_KEY is not a valid gRPC metadata value")]
    InvalidIngestionKey,
    #[error("failed to build OTLP exporter: {0}")]
    Exporter(String),
}

/// Install the process-wide `tracing` subscriber. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

/// Set up the OpenTelemetry TracerProvider and register it globally so
/// `OtelTraceLayer` spans reach the collector. Must run inside a Tokio runtime.
///
/// Reads config from environment:
///   - `OTEL_EXPORTER_OTLP_ENDPOINT` - collector gRPC address
///       Local: `http://localhost:4317`
///       SigNoz Cloud: `https://ingest.{region}.signoz.cloud:443`
///   - `OTEL_SERVICE_NAME` - service name tag (default: `breakeven`)
///   - `SIGNOZ_INGESTION_KEY` - SigNoz Cloud access token (optional for local)
///   - `DEPLOY_ENV` - deployment environment tag (default: `development`)
///
/// Returns `Ok(false)` when no endpoint is configured.
pub fn init_telemetry() -> Result<bool, TelemetryError> {
    let _ = dotenvy::dotenv();

    let endpoint = match std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") {
        Ok(ep) if !ep.trim().is_empty() => ep,
        _ => {
            tracing::info!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP telemetry");
            return Ok(false);
        }
    };

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| TRACER_NAME.to_string());
    let environment = std::env::var("DEPLOY_ENV").unwrap_or_else(|_| "development".to_string());

    let mut builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint);

    // TLS with system roots for HTTPS endpoints (e.g. SigNoz Cloud)
    if endpoint.starts_with("https://") {
        builder = builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }

    let ingestion_key = std::env::var("SIGNOZ_INGESTION_KEY")
        .ok()
        .filter(|k| !k.is_empty());
    if let Some(key) = &ingestion_key {
        let mut metadata = MetadataMap::new();
        metadata.insert(
            "signoz-ingestion-key",
            key.parse().map_err(|_| TelemetryError::InvalidIngestionKey)?,
        );
        builder = builder.with_metadata(metadata);
    }

    let exporter = builder
        .build()
        .map_err(|e| TelemetryError::Exporter(e.to_string()))?;

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name)
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new("deployment.environment", environment))
        .build();

    let provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(resource)
        .build();

    global::set_tracer_provider(provider);

    let mode = if ingestion_key.is_some() { "cloud" } else { "local" };
    tracing::info!(version = APP_VERSION, %endpoint, mode, "telemetry initialized");
    Ok(true)
}

/// Collapse path parameters so spans group by route, not by template key.
pub fn route_label(path: &str) -> String {
    match path.strip_prefix("/api/templates/") {
        Some("generate") => path.to_string(),
        Some(rest) if !rest.is_empty() => match rest.split_once('/') {
            Some((_, tail)) => format!("/api/templates/{{key}}/{tail}"),
            None => "/api/templates/{key}".to_string(),
        },
        _ => path.to_string(),
    }
}

/// Tower layer that creates an OpenTelemetry span for each HTTP request.
///
/// Captures: method, path, route, user-agent, request ID and response status.
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer(TRACER_NAME);
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let route = route_label(&path);

        let user_agent = req
            .headers()
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        let request_id = req
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let attributes = vec![
            KeyValue::new("http.method", method.clone()),
            KeyValue::new("http.target", path),
            KeyValue::new("http.route", route.clone()),
            KeyValue::new("http.user_agent", user_agent),
            KeyValue::new("http.request_id", request_id),
        ];

        let span = tracer
            .span_builder(format!("{method} {route}"))
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        let cx = Context::current_with_span(span);
        let mut inner = self.inner.clone();

        let guard = cx.clone().attach();
        let future = inner.call(req);
        drop(guard);

        Box::pin(async move {
            let response = future.await?;

            let span = cx.span();
            let status = response.status();
            span.set_attribute(KeyValue::new("http.status_code", status.as_u16() as i64));

            if status.is_server_error() {
                span.set_status(opentelemetry::trace::Status::error(status.to_string()));
            } else if status.is_client_error() {
                span.set_attribute(KeyValue::new("error.type", "client_error"));
            }

            Ok(response)
        })
    }
}
