use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use crate::errors::ApiError;

/// `axum::Json` whose rejections come back as the API envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}
