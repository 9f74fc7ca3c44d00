//! Generic list/detail controller shared by every resource.
//!
//! Each operation takes its inputs explicitly (repository, identifiers, raw
//! body) and returns a [`Reply`] or a [`ServiceError`]; route modules are thin
//! wrappers that pick the repository out of the application state.
//!
//! Detail operations always resolve the target before looking at the body, so
//! an unknown id answers 404 even when the payload is also invalid.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::common::{created_response, no_content_response, success_response};
use crate::errors::ServiceError;
use crate::repositories::CrudRepository;
use crate::validation::Schema;

/// Successful outcome of a controller operation
#[derive(Debug)]
pub enum Reply<T> {
    /// 200 with the serialized value
    Ok(T),
    /// 201 with the serialized value
    Created(T),
    /// 204 with an empty body
    NoContent,
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        match self {
            Reply::Ok(data) => success_response(data),
            Reply::Created(data) => created_response(data),
            Reply::NoContent => no_content_response(),
        }
    }
}

pub type ReplyResult<T> = Result<Reply<T>, ServiceError>;

/// Raw JSON request body. Syntax errors become a 400 in the standard error
/// envelope; shape checks happen later in [`Schema::decode`].
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| ServiceError::MalformedBody(rejection.body_text()))?;
        Ok(JsonBody(value))
    }
}

/// Parses a path segment as a primary key. Anything that is not an `i32`
/// cannot name a row, so it resolves to not found.
fn parse_id(segment: &str) -> Result<i32, ServiceError> {
    segment
        .parse::<i32>()
        .map_err(|_| ServiceError::NotFound(format!("no resource with id {:?}", segment)))
}

/// Primary key taken from a single-segment path such as `/customers/:id`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Id(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for Id
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ServiceError::InternalError(rejection.body_text()))?;
        parse_id(&segment).map(Id)
    }
}

/// Owner and primary key from a nested path such as
/// `/vendors/:vendor_id/items/:item_id`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopedId {
    pub owner: i32,
    pub id: i32,
}

#[async_trait]
impl<S> FromRequestParts<S> for ScopedId
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((owner, id)) = Path::<(String, String)>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ServiceError::InternalError(rejection.body_text()))?;
        Ok(ScopedId {
            owner: parse_id(&owner)?,
            id: parse_id(&id)?,
        })
    }
}

/// Loads a row or fails with not found
pub async fn resolve<R: CrudRepository>(repo: &R, id: i32) -> Result<R::Record, ServiceError> {
    repo.get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(R::RESOURCE, id))
}

pub async fn list<R: CrudRepository>(repo: &R) -> ReplyResult<Vec<R::Record>> {
    Ok(Reply::Ok(repo.list_all().await?))
}

pub async fn create<R: CrudRepository>(repo: &R, body: Value) -> ReplyResult<R::Record> {
    let payload = R::Payload::decode(&body)?;
    create_decoded(repo, payload).await
}

/// Second half of [`create`] for callers that decode the body themselves
pub async fn create_decoded<R: CrudRepository>(
    repo: &R,
    payload: R::Payload,
) -> ReplyResult<R::Record> {
    repo.check_relations(&payload).await?;
    let created = repo.create(payload).await?;
    Ok(Reply::Created(created))
}

pub async fn retrieve<R: CrudRepository>(repo: &R, id: i32) -> ReplyResult<R::Record> {
    Ok(Reply::Ok(resolve(repo, id).await?))
}

/// Whole-record replacement; the stored row is untouched unless every field
/// validates.
pub async fn replace<R: CrudRepository>(repo: &R, id: i32, body: Value) -> ReplyResult<R::Record> {
    resolve(repo, id).await?;
    let payload = R::Payload::decode(&body)?;
    replace_decoded(repo, id, payload).await
}

/// Second half of [`replace`] for callers that resolved the target and
/// decoded the body themselves
pub async fn replace_decoded<R: CrudRepository>(
    repo: &R,
    id: i32,
    payload: R::Payload,
) -> ReplyResult<R::Record> {
    repo.check_relations(&payload).await?;
    let updated = repo.update(id, payload).await?;
    debug!(resource = R::RESOURCE, id, "record replaced");
    Ok(Reply::Ok(updated))
}

pub async fn destroy<R: CrudRepository>(repo: &R, id: i32) -> ReplyResult<()> {
    resolve(repo, id).await?;
    repo.delete(id).await?;
    Ok(Reply::NoContent)
}
