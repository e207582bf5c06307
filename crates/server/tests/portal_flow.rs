use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use configs::{AppConfig, StorageBackend};
use serde_json::{json, Value};
use tower::ServiceExt;

const ASHA: &str = "5b0f3c1e-8d43-4b7e-9a57-2f0f6f1d2a10";
const VIKRAM: &str = "9e4c2a77-31b5-4f0e-8c1d-6b7a9f3e5d21";
const SWIFT_CHASSIS: &str = "MA3EWDE1S00123456";

async fn build_app() -> anyhow::Result<Router> {
    let mut cfg = AppConfig::default();
    cfg.storage.backend = StorageBackend::Memory;
    cfg.storage.seed_path = Some(concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/seed.json").to_string());
    Ok(server::build_app(&cfg).await?)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Vec<u8>)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder.header("content-type", "application/json").body(Body::from(serde_json::to_vec(&v)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    Ok((status, bytes.to_vec()))
}

fn message(bytes: &[u8]) -> String {
    let v: Value = serde_json::from_slice(bytes).unwrap_or(Value::Null);
    v["message"].as_str().unwrap_or_default().to_string()
}

#[tokio::test]
async fn health_and_openapi_are_served() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body)?, json!({"status": "ok"}));

    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    let doc: Value = serde_json::from_slice(&body)?;
    assert!(doc["paths"]["/portal/login"].is_object());
    Ok(())
}

#[tokio::test]
async fn login_outcomes() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = send(&app, "POST", "/portal/login", Some(json!({"username": "asha", "password": "Passw0rd"}))).await?;
    assert_eq!(status, StatusCode::OK);
    let user: Value = serde_json::from_slice(&body)?;
    assert_eq!(user["id"], ASHA);
    assert_eq!(user["full_name"], "Asha Rao");
    assert!(user.get("password_hash").is_none());

    let (status, body) = send(&app, "POST", "/portal/login", Some(json!({"username": "asha", "password": "nope"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let (status, body) = send(&app, "POST", "/portal/login", Some(json!({"username": "ghost", "password": "Passw0rd"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
    Ok(())
}

#[tokio::test]
async fn malformed_requests_are_bad_requests() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = send(&app, "POST", "/portal/login", Some(json!({"username": "asha"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!message(&body).is_empty());

    let (status, _) = send(&app, "GET", "/portal/users/not-a-uuid/policies", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/portal/policies/abc/vehicle", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn attach_checks_run_in_order() -> anyhow::Result<()> {
    let app = build_app().await?;
    let uri = format!("/portal/users/{ASHA}/policies");

    let (status, body) = send(&app, "POST", &uri, Some(json!({"policy_number": 9999, "chassis_number": SWIFT_CHASSIS}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "No Such PolicyNumber Exists");

    let (status, body) = send(&app, "POST", &uri, Some(json!({"policy_number": 1003, "chassis_number": SWIFT_CHASSIS}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "No Vehicle Found For Corresponding PolicyNumber");

    let (status, body) = send(&app, "POST", &uri, Some(json!({"policy_number": 1001, "chassis_number": "WRONG"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "ChasisNumber is not matches");

    // 未添加任何保单前列表为空
    let (status, body) = send(&app, "GET", &uri, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "There is No policyNumber added for corresponding user");
    Ok(())
}

#[tokio::test]
async fn attach_list_vehicle_delete_round() -> anyhow::Result<()> {
    let app = build_app().await?;
    let uri = format!("/portal/users/{ASHA}/policies");

    let (status, body) = send(&app, "POST", &uri, Some(json!({"policy_number": 1001, "chassis_number": SWIFT_CHASSIS}))).await?;
    assert_eq!(status, StatusCode::OK);
    let created: Value = serde_json::from_slice(&body)?;
    assert_eq!(created["user_id"], ASHA);
    assert_eq!(created["policy_number"], 1001);

    // 重复添加属于失败，返回 400 与错误文本
    let (status, body) = send(&app, "POST", &uri, Some(json!({"policy_number": 1001, "chassis_number": SWIFT_CHASSIS}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "PolicyNumber 1001 is already added for this user");

    let (status, body) = send(&app, "GET", &uri, None).await?;
    assert_eq!(status, StatusCode::OK);
    let listed: Vec<Value> = serde_json::from_slice(&body)?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["policy_number"], 1001);

    let (status, first) = send(&app, "GET", "/portal/policies/1001/vehicle", None).await?;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = send(&app, "GET", "/portal/policies/1001/vehicle", None).await?;
    assert_eq!(first, second);
    let dto: Value = serde_json::from_slice(&first)?;
    assert_eq!(dto["brand"], "Maruti Suzuki");
    assert_eq!(dto["rto_location"], "Pune, Maharashtra");

    let (status, body) = send(&app, "DELETE", "/portal/policies/1001", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body)?, json!("Deleted Successfully"));

    let (status, body) = send(&app, "DELETE", "/portal/policies/1001", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.is_empty());
    Ok(())
}

#[tokio::test]
async fn vehicle_without_link_is_null_and_unknown_user_is_rejected() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = send(&app, "GET", "/portal/policies/1003/vehicle", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body)?, Value::Null);

    let ghost = "00000000-0000-4000-8000-000000000000";
    let uri = format!("/portal/users/{ghost}/policies");
    let (status, body) = send(&app, "POST", &uri, Some(json!({"policy_number": 1002, "chassis_number": "MAT627123KLB98765"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), format!("user {ghost} not found"));

    // 另一个已存在的用户可以正常添加
    let uri = format!("/portal/users/{VIKRAM}/policies");
    let (status, _) = send(&app, "POST", &uri, Some(json!({"policy_number": 1002, "chassis_number": "MAT627123KLB98765"}))).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}
