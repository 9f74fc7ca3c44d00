use axum::{extract::State, routing::get, Router};

use super::resource::{self, Id, JsonBody, ReplyResult};
use crate::entities::CustomerModel;
use crate::AppState;

/// Routes mounted at `/customers`
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route(
            "/:id",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}

#[utoipa::path(
    get,
    path = "/api/v1/customers",
    summary = "List customers",
    tag = "Customers",
    responses(
        (status = 200, description = "All customers", body = Vec<CustomerModel>),
    )
)]
pub async fn list_customers(State(state): State<AppState>) -> ReplyResult<Vec<CustomerModel>> {
    resource::list(state.services.customers.as_ref()).await
}

#[utoipa::path(
    post,
    path = "/api/v1/customers",
    summary = "Create a customer",
    tag = "Customers",
    request_body = crate::dto::CustomerPayload,
    responses(
        (status = 201, description = "Customer created", body = CustomerModel),
        (status = 400, description = "Field errors keyed by field name", body = crate::validation::FieldErrors),
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ReplyResult<CustomerModel> {
    resource::create(state.services.customers.as_ref(), body).await
}

#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}",
    summary = "Get a customer",
    tag = "Customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer found", body = CustomerModel),
        (status = 404, description = "No customer with this id"),
    )
)]
pub async fn get_customer(State(state): State<AppState>, Id(id): Id) -> ReplyResult<CustomerModel> {
    resource::retrieve(state.services.customers.as_ref(), id).await
}

#[utoipa::path(
    put,
    path = "/api/v1/customers/{id}",
    summary = "Replace a customer",
    tag = "Customers",
    params(("id" = i32, Path, description = "Customer id")),
    request_body = crate::dto::CustomerPayload,
    responses(
        (status = 200, description = "Customer replaced", body = CustomerModel),
        (status = 400, description = "Field errors keyed by field name", body = crate::validation::FieldErrors),
        (status = 404, description = "No customer with this id"),
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Id(id): Id,
    JsonBody(body): JsonBody,
) -> ReplyResult<CustomerModel> {
    resource::replace(state.services.customers.as_ref(), id, body).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/customers/{id}",
    summary = "Delete a customer",
    tag = "Customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "No customer with this id"),
    )
)]
pub async fn delete_customer(State(state): State<AppState>, Id(id): Id) -> ReplyResult<()> {
    resource::destroy(state.services.customers.as_ref(), id).await
}
