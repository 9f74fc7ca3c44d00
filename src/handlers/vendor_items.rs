//! Items seen through their owning vendor.
//!
//! Shares the item controller logic; the only difference is the ownership
//! filter. The vendor is resolved first, then the item within that vendor,
//! and the path's vendor id always wins over a `vendor` field in the body.

use axum::{extract::State, routing::get, Router};
use tracing::instrument;

use super::resource::{self, Id, JsonBody, Reply, ReplyResult, ScopedId};
use crate::dto::ItemPayload;
use crate::entities::ItemModel;
use crate::errors::ServiceError;
use crate::repositories::{CrudRepository, ItemRepository, OwnedRepository};
use crate::AppState;

/// Routes merged into the `/vendors` router
pub fn vendor_item_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/:id/items",
            get(list_vendor_items).post(create_vendor_item),
        )
        .route(
            "/:id/items/:item_id",
            get(get_vendor_item)
                .put(update_vendor_item)
                .delete(delete_vendor_item),
        )
}

async fn resolve_vendor(state: &AppState, vendor_id: i32) -> Result<(), ServiceError> {
    resource::resolve(state.services.vendors.as_ref(), vendor_id)
        .await
        .map(|_| ())
}

#[instrument(skip(state))]
async fn resolve_item(state: &AppState, path: ScopedId) -> Result<ItemModel, ServiceError> {
    resolve_vendor(state, path.owner).await?;
    state
        .services
        .items
        .get_by_id_and_owner(path.id, path.owner)
        .await?
        .ok_or_else(|| ServiceError::not_found(ItemRepository::RESOURCE, path.id))
}

#[utoipa::path(
    get,
    path = "/api/v1/vendors/{vendor_id}/items",
    summary = "List a vendor's items",
    tag = "Vendor items",
    params(("vendor_id" = i32, Path, description = "Vendor id")),
    responses(
        (status = 200, description = "Items owned by the vendor", body = Vec<ItemModel>),
        (status = 404, description = "No vendor with this id"),
    )
)]
pub async fn list_vendor_items(
    State(state): State<AppState>,
    Id(vendor_id): Id,
) -> ReplyResult<Vec<ItemModel>> {
    resolve_vendor(&state, vendor_id).await?;
    let items = state.services.items.list_by_owner(vendor_id).await?;
    Ok(Reply::Ok(items))
}

#[utoipa::path(
    post,
    path = "/api/v1/vendors/{vendor_id}/items",
    summary = "Create an item for a vendor",
    tag = "Vendor items",
    params(("vendor_id" = i32, Path, description = "Vendor id")),
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item created", body = ItemModel),
        (status = 400, description = "Field errors keyed by field name", body = crate::validation::FieldErrors),
        (status = 404, description = "No vendor with this id"),
    )
)]
pub async fn create_vendor_item(
    State(state): State<AppState>,
    Id(vendor_id): Id,
    JsonBody(body): JsonBody,
) -> ReplyResult<ItemModel> {
    resolve_vendor(&state, vendor_id).await?;
    let payload = ItemPayload::decode_for_vendor(&body, vendor_id)?;
    resource::create_decoded(state.services.items.as_ref(), payload).await
}

#[utoipa::path(
    get,
    path = "/api/v1/vendors/{vendor_id}/items/{item_id}",
    summary = "Get one of a vendor's items",
    tag = "Vendor items",
    params(
        ("vendor_id" = i32, Path, description = "Vendor id"),
        ("item_id" = i32, Path, description = "Item id"),
    ),
    responses(
        (status = 200, description = "Item found", body = ItemModel),
        (status = 404, description = "Unknown vendor, or the item belongs to another vendor"),
    )
)]
pub async fn get_vendor_item(
    State(state): State<AppState>,
    path: ScopedId,
) -> ReplyResult<ItemModel> {
    Ok(Reply::Ok(resolve_item(&state, path).await?))
}

#[utoipa::path(
    put,
    path = "/api/v1/vendors/{vendor_id}/items/{item_id}",
    summary = "Replace one of a vendor's items",
    tag = "Vendor items",
    params(
        ("vendor_id" = i32, Path, description = "Vendor id"),
        ("item_id" = i32, Path, description = "Item id"),
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item replaced", body = ItemModel),
        (status = 400, description = "Field errors keyed by field name", body = crate::validation::FieldErrors),
        (status = 404, description = "Unknown vendor, or the item belongs to another vendor"),
    )
)]
pub async fn update_vendor_item(
    State(state): State<AppState>,
    path: ScopedId,
    JsonBody(body): JsonBody,
) -> ReplyResult<ItemModel> {
    resolve_item(&state, path).await?;
    let payload = ItemPayload::decode_for_vendor(&body, path.owner)?;
    resource::replace_decoded(state.services.items.as_ref(), path.id, payload).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/vendors/{vendor_id}/items/{item_id}",
    summary = "Delete one of a vendor's items",
    tag = "Vendor items",
    params(
        ("vendor_id" = i32, Path, description = "Vendor id"),
        ("item_id" = i32, Path, description = "Item id"),
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Unknown vendor, or the item belongs to another vendor"),
    )
)]
pub async fn delete_vendor_item(State(state): State<AppState>, path: ScopedId) -> ReplyResult<()> {
    resolve_item(&state, path).await?;
    state.services.items.delete(path.id).await?;
    Ok(Reply::NoContent)
}
