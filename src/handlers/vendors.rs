use axum::{extract::State, routing::get, Router};

use super::resource::{self, Id, JsonBody, ReplyResult};
use crate::entities::VendorModel;
use crate::AppState;

/// Routes mounted at `/vendors`
pub fn vendor_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vendors).post(create_vendor))
        .route(
            "/:id",
            get(get_vendor).put(update_vendor).delete(delete_vendor),
        )
}

#[utoipa::path(
    get,
    path = "/api/v1/vendors",
    summary = "List vendors",
    tag = "Vendors",
    responses(
        (status = 200, description = "All vendors", body = Vec<VendorModel>),
    )
)]
pub async fn list_vendors(State(state): State<AppState>) -> ReplyResult<Vec<VendorModel>> {
    resource::list(state.services.vendors.as_ref()).await
}

#[utoipa::path(
    post,
    path = "/api/v1/vendors",
    summary = "Create a vendor",
    tag = "Vendors",
    request_body = crate::dto::VendorPayload,
    responses(
        (status = 201, description = "Vendor created", body = VendorModel),
        (status = 400, description = "Field errors keyed by field name", body = crate::validation::FieldErrors),
    )
)]
pub async fn create_vendor(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ReplyResult<VendorModel> {
    resource::create(state.services.vendors.as_ref(), body).await
}

#[utoipa::path(
    get,
    path = "/api/v1/vendors/{id}",
    summary = "Get a vendor",
    tag = "Vendors",
    params(("id" = i32, Path, description = "Vendor id")),
    responses(
        (status = 200, description = "Vendor found", body = VendorModel),
        (status = 404, description = "No vendor with this id"),
    )
)]
pub async fn get_vendor(State(state): State<AppState>, Id(id): Id) -> ReplyResult<VendorModel> {
    resource::retrieve(state.services.vendors.as_ref(), id).await
}

#[utoipa::path(
    put,
    path = "/api/v1/vendors/{id}",
    summary = "Replace a vendor",
    tag = "Vendors",
    params(("id" = i32, Path, description = "Vendor id")),
    request_body = crate::dto::VendorPayload,
    responses(
        (status = 200, description = "Vendor replaced", body = VendorModel),
        (status = 400, description = "Field errors keyed by field name", body = crate::validation::FieldErrors),
        (status = 404, description = "No vendor with this id"),
    )
)]
pub async fn update_vendor(
    State(state): State<AppState>,
    Id(id): Id,
    JsonBody(body): JsonBody,
) -> ReplyResult<VendorModel> {
    resource::replace(state.services.vendors.as_ref(), id, body).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/vendors/{id}",
    summary = "Delete a vendor",
    tag = "Vendors",
    params(("id" = i32, Path, description = "Vendor id")),
    responses(
        (status = 204, description = "Vendor deleted"),
        (status = 404, description = "No vendor with this id"),
    )
)]
pub async fn delete_vendor(State(state): State<AppState>, Id(id): Id) -> ReplyResult<()> {
    resource::destroy(state.services.vendors.as_ref(), id).await
}
