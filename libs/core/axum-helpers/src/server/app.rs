use super::shutdown::{StopSignal, os_signal};
use crate::errors::handlers::not_found;
use axum::{Json, Router, routing::get};
use core_config::server::ServerConfig;
use std::future::{Future, IntoFuture};
use std::io;
use std::time::Duration;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Path of the generated OpenAPI document
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Wrap the API routes with documentation, the 404 fallback and request tracing.
///
/// Serves the OpenAPI document of `T` at [`OPENAPI_JSON_PATH`] and renders it
/// with ReDoc (`/redoc`) and Scalar (`/scalar`). `apis` is merged at the root
/// and must already have its state applied.
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};

    let doc = T::openapi();
    let doc_json = doc.clone();

    Router::new()
        .route(
            OPENAPI_JSON_PATH,
            get(move || {
                let doc = doc_json.clone();
                async move { Json(doc) }
            }),
        )
        .merge(Redoc::with_url("/redoc", doc.clone()))
        .merge(Scalar::with_url("/scalar", doc))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup` within `shutdown_timeout`.
///
/// In-flight requests are drained before the function returns.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(server_config.addr).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let stop = StopSignal::new();
    let server = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown({
            let stop = stop.clone();
            async move { stop.stopped().await }
        })
        .into_future();

    run_until_stopped(server, stop, shutdown_timeout, cleanup).await
}

/// Drive `server` and run `cleanup` once it stops, whether a signal or a
/// server error ended it.
async fn run_until_stopped<S, F>(
    server: S,
    stop: StopSignal,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    S: Future<Output = io::Result<()>>,
    F: Future<Output = ()> + Send + 'static,
{
    let watcher = stop.clone();
    let cleanup_handle = tokio::spawn(async move {
        tokio::select! {
            _ = os_signal() => {
                watcher.trigger("signal");
            }
            _ = watcher.stopped() => {}
        }

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed"),
            Err(_) => warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let serve_result = server
        .await
        .inspect_err(|e| tracing::error!("Server encountered an error: {:?}", e));

    stop.trigger("server stopped");
    cleanup_handle.await.ok();

    serve_result
}
