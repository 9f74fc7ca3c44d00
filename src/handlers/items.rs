use axum::{extract::State, routing::get, Router};

use super::resource::{self, Id, JsonBody, ReplyResult};
use crate::entities::ItemModel;
use crate::AppState;

/// Routes mounted at `/items`
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route(
            "/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
}

#[utoipa::path(
    get,
    path = "/api/v1/items",
    summary = "List items",
    tag = "Items",
    responses(
        (status = 200, description = "All items", body = Vec<ItemModel>),
    )
)]
pub async fn list_items(State(state): State<AppState>) -> ReplyResult<Vec<ItemModel>> {
    resource::list(state.services.items.as_ref()).await
}

#[utoipa::path(
    post,
    path = "/api/v1/items",
    summary = "Create an item",
    tag = "Items",
    request_body = crate::dto::ItemPayload,
    responses(
        (status = 201, description = "Item created", body = ItemModel),
        (status = 400, description = "Field errors keyed by field name", body = crate::validation::FieldErrors),
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ReplyResult<ItemModel> {
    resource::create(state.services.items.as_ref(), body).await
}

#[utoipa::path(
    get,
    path = "/api/v1/items/{id}",
    summary = "Get an item",
    tag = "Items",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item found", body = ItemModel),
        (status = 404, description = "No item with this id"),
    )
)]
pub async fn get_item(State(state): State<AppState>, Id(id): Id) -> ReplyResult<ItemModel> {
    resource::retrieve(state.services.items.as_ref(), id).await
}

#[utoipa::path(
    put,
    path = "/api/v1/items/{id}",
    summary = "Replace an item",
    tag = "Items",
    params(("id" = i32, Path, description = "Item id")),
    request_body = crate::dto::ItemPayload,
    responses(
        (status = 200, description = "Item replaced", body = ItemModel),
        (status = 400, description = "Field errors keyed by field name", body = crate::validation::FieldErrors),
        (status = 404, description = "No item with this id"),
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Id(id): Id,
    JsonBody(body): JsonBody,
) -> ReplyResult<ItemModel> {
    resource::replace(state.services.items.as_ref(), id, body).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/items/{id}",
    summary = "Delete an item",
    tag = "Items",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "No item with this id"),
    )
)]
pub async fn delete_item(State(state): State<AppState>, Id(id): Id) -> ReplyResult<()> {
    resource::destroy(state.services.items.as_ref(), id).await
}
