use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(crate::api::root),
    components(schemas(axum_helpers::ErrorResponse, crate::api::Greeting)),
    info(
        title = "Items API",
        version = "0.1.0",
        description = "Create, read, update and delete items"
    )
)]
struct ServiceDoc;

/// Service document with the item endpoints merged in
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ServiceDoc::openapi();
        doc.merge(domain_items::handlers::ApiDoc::openapi());
        doc
    }
}
