use server::config::load_config;
use server::health::record_start_time;
use server::openapi::api_router;
use server::telemetry::{init_telemetry, init_tracing, OtelTraceLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    record_start_time();

    let config = load_config();

    let mut telemetry_active = false;
    if config.features.telemetry {
        match init_telemetry() {
            Ok(active) => telemetry_active = active,
            Err(e) => tracing::error!(error = %e, "telemetry disabled"),
        }
    }

    let mut router = api_router(config);

    if telemetry_active {
        router = router.layer(OtelTraceLayer);
    }

    let router = router
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;
    tracing::info!(addr = %config.server.bind_addr, docs = config.features.docs, "listening");

    axum::serve(listener, router).await?;
    Ok(())
}
