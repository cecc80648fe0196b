//! HTTP host for the autos server: owns the middleware stack, the
//! infrastructure endpoints (`/health`, `/openapi.json`) and the listener.

use anyhow::{Context, Result};
use axum::{middleware::from_fn, response::Json, routing::get, Router};
use std::future::Future;
use std::net::SocketAddr;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
};
use utoipa::openapi::OpenApi;

mod config;
pub mod request_id;
mod web;

pub use config::ApiIngressConfig;

/// Assemble the final router around the module routes.
///
/// Layers, outermost first: set x-request-id → propagate x-request-id →
/// trace → request id into extensions → timeout → CORS → body limit.
pub fn build_router(cfg: &ApiIngressConfig, api: Router, openapi: OpenApi) -> Result<Router> {
    let spec = serde_json::to_value(&openapi).context("Failed to serialize OpenAPI document")?;

    let mut router = Router::new()
        .route("/health", get(web::health_check))
        .route("/openapi.json", get(move || async move { Json(spec) }))
        .merge(api);

    // axum wraps earlier layers with later ones, so go innermost first
    router = router.layer(RequestBodyLimitLayer::new(cfg.body_limit_bytes));

    if cfg.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    if let Some(timeout) = cfg.request_timeout() {
        router = router.layer(TimeoutLayer::new(timeout));
    }

    let x_request_id = request_id::header();
    router = router
        .layer(from_fn(request_id::push_req_id_to_extensions))
        .layer(request_id::create_trace_layer())
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, request_id::MakeReqId));

    Ok(router)
}

/// Bind `cfg.bind_addr` and serve until `shutdown` resolves.
pub async fn serve<F>(router: Router, cfg: &ApiIngressConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = cfg
        .bind_addr
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", cfg.bind_addr))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("HTTP server bound on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown.await;
            tracing::info!("HTTP server shutting down gracefully");
        })
        .await
        .context("HTTP server failed")
}
