//! # Axum Helpers
//!
//! Shared plumbing for the HTTP services.
//!
//! - **[`server`]**: router assembly with API docs, health checks and graceful shutdown
//! - **[`errors`]**: [`AppError`] and the JSON [`ErrorResponse`] body with error codes
//! - **[`extractors`]**: [`JsonPayload`] and [`IdPath`] rejecting with that body
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//!
//! let router = create_router::<ApiDoc>(item_routes).merge(health_router(app_info!()));
//! create_production_app(router, &config.server, Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{IdPath, JsonPayload};
pub use server::{
    HealthCheckFuture, HealthResponse, close_postgres, create_production_app, create_router,
    health_router, run_health_checks,
};
