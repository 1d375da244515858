use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use common::types::ApiResponse;
use models::services;
use service::catalog::domain::{CreateServiceInput, UpdateServiceInput};

use crate::errors::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

pub const SERVICE_UPDATED: &str = "Service updated";
pub const SERVICE_DELETED: &str = "Service deleted";

#[utoipa::path(
    get,
    path = "/api/services",
    tag = "services",
    responses((status = 200, description = "Catalog, seeded with the default offerings when empty", body = crate::openapi::ServiceListEnvelope))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<services::Model>>>, ApiError> {
    let rows = state.catalog.list().await?;
    info!(count = rows.len(), "list services");
    Ok(Json(ApiResponse::ok(rows)))
}

#[utoipa::path(
    get,
    path = "/api/services/{id}",
    tag = "services",
    params(("id" = String, Path, description = "Service id")),
    responses(
        (status = 200, description = "Service", body = crate::openapi::ServiceEnvelope),
        (status = 404, description = "Service not found", body = crate::openapi::ErrorEnvelope)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<services::Model>>, ApiError> {
    let found = state.catalog.get(&id).await?;
    Ok(Json(ApiResponse::ok(found)))
}

#[utoipa::path(
    post,
    path = "/api/services",
    tag = "services",
    request_body = crate::openapi::ServiceInputDoc,
    responses(
        (status = 200, description = "Created service", body = crate::openapi::ServiceEnvelope),
        (status = 400, description = "Malformed body", body = crate::openapi::ErrorEnvelope)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateServiceInput>,
) -> Result<Json<ApiResponse<services::Model>>, ApiError> {
    let created = state.catalog.create(input).await?;
    Ok(Json(ApiResponse::ok(created)))
}

#[utoipa::path(
    put,
    path = "/api/services/{id}",
    tag = "services",
    params(("id" = String, Path, description = "Service id")),
    request_body = crate::openapi::ServiceInputDoc,
    responses(
        (status = 200, description = "Service updated", body = crate::openapi::MessageEnvelope),
        (status = 404, description = "Service not found", body = crate::openapi::ErrorEnvelope)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<UpdateServiceInput>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.catalog.update(&id, input).await?;
    Ok(Json(ApiResponse::ack(SERVICE_UPDATED)))
}

#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    tag = "services",
    params(("id" = String, Path, description = "Service id")),
    responses(
        (status = 200, description = "Service deleted", body = crate::openapi::MessageEnvelope),
        (status = 404, description = "Service not found", body = crate::openapi::ErrorEnvelope)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.catalog.delete(&id).await?;
    Ok(Json(ApiResponse::ack(SERVICE_DELETED)))
}
