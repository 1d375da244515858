use axum::{extract::State, Json};

use common::types::ApiResponse;
use models::contacts;
use service::contact::domain::ContactInput;

use crate::errors::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

pub const CONTACT_THANKS: &str = "Thank you for your message! We will get back to you soon.";
pub const CONTACT_FAILED: &str = "Failed to submit contact form";

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = crate::openapi::ContactInputDoc,
    responses(
        (status = 200, description = "Submission stored", body = crate::openapi::ContactEnvelope),
        (status = 400, description = "Name, email, and message are required", body = crate::openapi::ErrorEnvelope),
        (status = 500, description = "Failed to submit contact form", body = crate::openapi::ErrorEnvelope)
    )
)]
pub async fn submit(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ContactInput>,
) -> Result<Json<ApiResponse<contacts::Model>>, ApiError> {
    let saved = state
        .contacts
        .submit(input)
        .await
        .map_err(|e| ApiError::from(e).with_public_message(CONTACT_FAILED))?;
    Ok(Json(ApiResponse::ok_with_message(saved, CONTACT_THANKS)))
}

// 管理端查看：按提交时间倒序
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "contact",
    responses((status = 200, description = "Submissions, newest first", body = crate::openapi::ContactListEnvelope))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<contacts::Model>>>, ApiError> {
    let rows = state.contacts.list().await?;
    Ok(Json(ApiResponse::ok(rows)))
}
