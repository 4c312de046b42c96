use axum::{Json, Router, routing::get};
use axum_helpers::server::{create_router, health_router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod health;
pub mod items;

#[derive(Debug, Serialize, ToSchema)]
pub struct Greeting {
    #[serde(rename = "Hello")]
    pub hello: String,
}

/// Root greeting
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is up", body = Greeting))
)]
pub async fn root() -> Json<Greeting> {
    Json(Greeting {
        hello: "World".to_string(),
    })
}

/// Application routes with state already applied.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(items::router(state))
}

/// `/ready` with the state it checks.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

/// The complete service: routes, docs, fallback, tracing and health checks.
pub fn app(state: &AppState) -> Router {
    create_router::<ApiDoc>(routes(state))
        .merge(health_router(state.config.app))
        .merge(ready_router(state.clone()))
}
