//! Customer HTTP handlers

use axum::Json;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, FromRequestParts, Query, State};
use axum::http::request::Parts;
use serde::Deserialize;

use crate::error::ServiceError;
use crate::models::{Customer, CustomerSave};
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, ServiceError>;

#[derive(Debug, Deserialize)]
struct IdQuery {
    id: i64,
}

/// `id` query parameter; rejects with 400 when absent or unparseable
pub struct CustomerId(pub i64);

impl<S> FromRequestParts<S> for CustomerId
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(IdQuery { id }) = Query::<IdQuery>::from_request_parts(parts, state)
            .await
            .map_err(|_| ServiceError::InvalidRequest("missing or malformed id"))?;
        Ok(CustomerId(id))
    }
}

pub async fn get_by_id(
    State(state): State<AppState>,
    CustomerId(id): CustomerId,
) -> ApiResult<Customer> {
    Ok(Json(state.customers.by_id(id).await?))
}

pub async fn get_all(State(state): State<AppState>) -> ApiResult<Vec<Customer>> {
    Ok(Json(state.customers.all().await?))
}

pub async fn get_all_active(State(state): State<AppState>) -> ApiResult<Vec<Customer>> {
    Ok(Json(state.customers.all_active().await?))
}

pub async fn block_by_id(
    State(state): State<AppState>,
    CustomerId(id): CustomerId,
) -> ApiResult<Customer> {
    Ok(Json(state.customers.block_by_id(id).await?))
}

pub async fn unblock_by_id(
    State(state): State<AppState>,
    CustomerId(id): CustomerId,
) -> ApiResult<Customer> {
    Ok(Json(state.customers.unblock_by_id(id).await?))
}

pub async fn remove_by_id(
    State(state): State<AppState>,
    CustomerId(id): CustomerId,
) -> ApiResult<Customer> {
    Ok(Json(state.customers.remove_by_id(id).await?))
}

pub async fn save(
    State(state): State<AppState>,
    payload: Result<Form<CustomerSave>, FormRejection>,
) -> ApiResult<Customer> {
    let Form(payload) =
        payload.map_err(|_| ServiceError::InvalidRequest("malformed save payload"))?;
    if payload.name.is_empty() && payload.phone.is_empty() {
        return Err(ServiceError::InvalidRequest("name and phone are both empty"));
    }
    Ok(Json(
        state
            .customers
            .save(payload.id, &payload.name, &payload.phone)
            .await?,
    ))
}
