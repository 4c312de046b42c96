use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, JsonPayload,
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
        UnprocessableEntityResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemRepository;
use crate::service::ItemService;

pub const ITEMS_TAG: &str = "items";

/// OpenAPI documentation for the items endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(
        schemas(Item, CreateItem, UpdateItem),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            UnprocessableEntityResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = ITEMS_TAG, description = "Item management endpoints")
    )
)]
pub struct ApiDoc;

type SharedService<R> = State<Arc<ItemService<R>>>;

/// Item routes, registered with and without the trailing slash on the collection
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/items/", get(list_items::<R>).post(create_item::<R>))
        .route("/items", get(list_items::<R>).post(create_item::<R>))
        .route(
            "/items/{id}",
            get(get_item::<R>)
                .put(update_item::<R>)
                .delete(delete_item::<R>),
        )
        .with_state(shared_service)
}

/// List all items ordered by id
#[utoipa::path(
    get,
    path = "/items/",
    tag = ITEMS_TAG,
    responses(
        (status = 200, description = "All items", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): SharedService<R>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Create an item
#[utoipa::path(
    post,
    path = "/items/",
    tag = ITEMS_TAG,
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, response = BadRequestResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): SharedService<R>,
    JsonPayload(input): JsonPayload<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by id
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = ITEMS_TAG,
    params(
        ("id" = i32, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): SharedService<R>,
    IdPath(id): IdPath,
) -> ItemResult<Json<Item>> {
    service
        .get_item(id)
        .await?
        .map(Json)
        .ok_or(ItemError::NotFound(id))
}

/// Replace an item's name and description
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = ITEMS_TAG,
    params(
        ("id" = i32, Path, description = "Item identifier")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): SharedService<R>,
    IdPath(id): IdPath,
    JsonPayload(input): JsonPayload<UpdateItem>,
) -> ItemResult<Json<Item>> {
    service
        .update_item(id, input)
        .await?
        .map(Json)
        .ok_or(ItemError::NotFound(id))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = ITEMS_TAG,
    params(
        ("id" = i32, Path, description = "Item identifier")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): SharedService<R>,
    IdPath(id): IdPath,
) -> ItemResult<StatusCode> {
    if service.delete_item(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ItemError::NotFound(id))
    }
}
