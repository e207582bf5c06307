use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use common::types::MessageBody;
use service::portal::Outcome;

/// HTTP rendering of a portal [`Outcome`].
#[derive(Debug)]
pub struct ApiOutcome<T>(pub Outcome<T>);

impl<T> From<Outcome<T>> for ApiOutcome<T> {
    fn from(o: Outcome<T>) -> Self { ApiOutcome(o) }
}

fn with_message(status: StatusCode, message: Option<String>) -> Response {
    match message {
        Some(m) => (status, Json(MessageBody::new(m))).into_response(),
        None => status.into_response(),
    }
}

impl<T: Serialize> IntoResponse for ApiOutcome<T> {
    fn into_response(self) -> Response {
        match self.0 {
            Outcome::Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Outcome::NotFound(msg) => with_message(StatusCode::NOT_FOUND, msg),
            Outcome::BadRequest(msg) => with_message(StatusCode::BAD_REQUEST, msg),
        }
    }
}

// 请求体或路径参数无法解析时，统一按 400 返回
impl<T> From<JsonRejection> for ApiOutcome<T> {
    fn from(r: JsonRejection) -> Self { ApiOutcome(Outcome::BadRequest(Some(r.body_text()))) }
}

impl<T> From<PathRejection> for ApiOutcome<T> {
    fn from(r: PathRejection) -> Self { ApiOutcome(Outcome::BadRequest(Some(r.body_text()))) }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("seed load failed: {0}")]
    Seed(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

impl IntoResponse for StartupError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let msg = self.to_string();
        error!(error = %msg, "startup error");
        (status, Json(serde_json::json!({"error": msg}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(resp: Response) -> Vec<u8> { to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec() }

    #[tokio::test]
    async fn ok_is_200_with_json() {
        let resp = ApiOutcome(Outcome::Ok(vec![1, 2])).into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_of(resp).await, b"[1,2]");
    }

    #[tokio::test]
    async fn not_found_carries_message_when_present() {
        let resp = ApiOutcome::<()>(Outcome::NotFound(Some("No Such PolicyNumber Exists".into()))).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let v: serde_json::Value = serde_json::from_slice(&body_of(resp).await).unwrap();
        assert_eq!(v["message"], "No Such PolicyNumber Exists");
    }

    #[tokio::test]
    async fn bodiless_outcomes_have_empty_body() {
        let resp = ApiOutcome::<()>(Outcome::NotFound(None)).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(body_of(resp).await.is_empty());

        let resp = ApiOutcome::<()>(Outcome::BadRequest(None)).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(body_of(resp).await.is_empty());
    }

    #[test]
    fn startup_error_is_500() {
        let resp = StartupError::InvalidConfig("port".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
