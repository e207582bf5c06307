use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::portal::PortalController;

use crate::openapi::ApiDoc;

pub mod portal;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, portal API and OpenAPI docs
pub fn build_router(controller: PortalController, cors: CorsLayer) -> Router {
    let portal_routes = Router::new()
        .route("/portal/login", post(portal::login))
        .route(
            "/portal/users/:user_id/policies",
            get(portal::get_policy_numbers).post(portal::add_policy_number),
        )
        .route("/portal/policies/:policy_number/vehicle", get(portal::get_vehicle_details))
        .route("/portal/policies/:policy_number", delete(portal::delete_policy_number))
        .with_state(controller);

    Router::new()
        .route("/health", get(health))
        .merge(portal_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
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
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
