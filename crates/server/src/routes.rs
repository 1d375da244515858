pub mod contacts;
pub mod services;

use std::path::Path;

use axum::{
    routing::{get, post, MethodRouter},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::{metrics::encode_metrics, types::Health};

use crate::errors::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Process is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics() -> impl axum::response::IntoResponse {
    encode_metrics()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Unknown `/api` paths and unsupported methods on known ones.
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}

// 同一路由同时挂载带/不带尾斜杠的两种写法
fn both(router: Router<AppState>, path: &str, method_router: MethodRouter<AppState>) -> Router<AppState> {
    router
        .route(path, method_router.clone())
        .route(&format!("{path}/"), method_router)
}

/// `/api` router: services CRUD and the contact endpoints.
pub fn api_router() -> Router<AppState> {
    let api = Router::new();
    let api = both(api, "/services", get(services::list).post(services::create).fallback(not_found));
    let api = both(
        api,
        "/services/:id",
        get(services::get)
            .put(services::update)
            .delete(services::delete)
            .fallback(not_found),
    );
    let api = both(api, "/contact", post(contacts::submit).fallback(not_found));
    let api = both(api, "/contacts", get(contacts::list).fallback(not_found));
    api.fallback(not_found)
}

/// Build the full application router: API, operational endpoints and the static site.
pub fn build_router(state: AppState, cors: CorsLayer, frontend_dir: impl AsRef<Path>) -> Router {
    let dir = frontend_dir.as_ref();
    let static_dir = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api", api_router())
        .fallback_service(static_dir)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
