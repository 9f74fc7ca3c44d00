use axum::{extract::State, routing::get, Router};

use super::resource::{self, Id, JsonBody, ReplyResult};
use crate::entities::PreorderModel;
use crate::AppState;

/// Routes mounted at `/preorders`
pub fn preorder_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_preorders).post(create_preorder))
        .route(
            "/:id",
            get(get_preorder).put(update_preorder).delete(delete_preorder),
        )
}

#[utoipa::path(
    get,
    path = "/api/v1/preorders",
    summary = "List preorders",
    tag = "Preorders",
    responses(
        (status = 200, description = "All preorders", body = Vec<PreorderModel>),
    )
)]
pub async fn list_preorders(State(state): State<AppState>) -> ReplyResult<Vec<PreorderModel>> {
    resource::list(state.services.preorders.as_ref()).await
}

#[utoipa::path(
    post,
    path = "/api/v1/preorders",
    summary = "Create a preorder",
    tag = "Preorders",
    request_body = crate::dto::PreorderPayload,
    responses(
        (status = 201, description = "Preorder created", body = PreorderModel),
        (status = 400, description = "Field errors keyed by field name", body = crate::validation::FieldErrors),
    )
)]
pub async fn create_preorder(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ReplyResult<PreorderModel> {
    resource::create(state.services.preorders.as_ref(), body).await
}

#[utoipa::path(
    get,
    path = "/api/v1/preorders/{id}",
    summary = "Get a preorder",
    tag = "Preorders",
    params(("id" = i32, Path, description = "Preorder id")),
    responses(
        (status = 200, description = "Preorder found", body = PreorderModel),
        (status = 404, description = "No preorder with this id"),
    )
)]
pub async fn get_preorder(State(state): State<AppState>, Id(id): Id) -> ReplyResult<PreorderModel> {
    resource::retrieve(state.services.preorders.as_ref(), id).await
}

#[utoipa::path(
    put,
    path = "/api/v1/preorders/{id}",
    summary = "Replace a preorder",
    tag = "Preorders",
    params(("id" = i32, Path, description = "Preorder id")),
    request_body = crate::dto::PreorderPayload,
    responses(
        (status = 200, description = "Preorder replaced", body = PreorderModel),
        (status = 400, description = "Field errors keyed by field name", body = crate::validation::FieldErrors),
        (status = 404, description = "No preorder with this id"),
    )
)]
pub async fn update_preorder(
    State(state): State<AppState>,
    Id(id): Id,
    JsonBody(body): JsonBody,
) -> ReplyResult<PreorderModel> {
    resource::replace(state.services.preorders.as_ref(), id, body).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/preorders/{id}",
    summary = "Delete a preorder",
    tag = "Preorders",
    params(("id" = i32, Path, description = "Preorder id")),
    responses(
        (status = 204, description = "Preorder deleted"),
        (status = 404, description = "No preorder with this id"),
    )
)]
pub async fn delete_preorder(State(state): State<AppState>, Id(id): Id) -> ReplyResult<()> {
    resource::destroy(state.services.preorders.as_ref(), id).await
}
