use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use service::portal::domain::{AttachPolicyInput, LoginInput, PortalUser, UserPolicyList, VehicleDto};
use service::portal::PortalController;

use crate::errors::ApiOutcome;

type Body<T> = Result<Json<T>, JsonRejection>;
type Param<T> = Result<Path<T>, PathRejection>;

#[utoipa::path(
    post, path = "/portal/login", tag = "portal",
    request_body = crate::openapi::LoginRequest,
    responses(
        (status = 200, description = "Authenticated user", body = crate::openapi::PortalUserDoc),
        (status = 404, description = "Unknown username or wrong password"),
        (status = 400, description = "Bad Request", body = crate::openapi::MessageDoc)
    )
)]
pub async fn login(State(portal): State<PortalController>, body: Body<LoginInput>) -> ApiOutcome<PortalUser> {
    let Json(input) = match body { Ok(b) => b, Err(r) => return r.into() };
    portal.login(&input.username, &input.password).await.into()
}

#[utoipa::path(
    post, path = "/portal/users/{user_id}/policies", tag = "portal",
    params(("user_id" = Uuid, Path, description = "Portal user id")),
    request_body = crate::openapi::AttachPolicyRequest,
    responses(
        (status = 200, description = "Policy number added", body = crate::openapi::UserPolicyListDoc),
        (status = 404, description = "Policy, vehicle link or chassis check failed", body = crate::openapi::MessageDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::MessageDoc)
    )
)]
pub async fn add_policy_number(
    State(portal): State<PortalController>,
    user_id: Param<Uuid>,
    body: Body<AttachPolicyInput>,
) -> ApiOutcome<UserPolicyList> {
    let Path(user_id) = match user_id { Ok(p) => p, Err(r) => return r.into() };
    let Json(input) = match body { Ok(b) => b, Err(r) => return r.into() };
    portal.add_policy_number(user_id, input.policy_number, &input.chassis_number).await.into()
}

#[utoipa::path(
    get, path = "/portal/users/{user_id}/policies", tag = "portal",
    params(("user_id" = Uuid, Path, description = "Portal user id")),
    responses(
        (status = 200, description = "Policy numbers of the user", body = [crate::openapi::UserPolicyListDoc]),
        (status = 404, description = "No policy numbers added", body = crate::openapi::MessageDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get_policy_numbers(State(portal): State<PortalController>, user_id: Param<Uuid>) -> ApiOutcome<Vec<UserPolicyList>> {
    let Path(user_id) = match user_id { Ok(p) => p, Err(r) => return r.into() };
    portal.get_policy_numbers(user_id).await.into()
}

#[utoipa::path(
    get, path = "/portal/policies/{policy_number}/vehicle", tag = "portal",
    params(("policy_number" = i32, Path, description = "Policy number")),
    responses(
        (status = 200, description = "Vehicle details, or null when the policy has no vehicle", body = crate::openapi::VehicleDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get_vehicle_details(State(portal): State<PortalController>, policy_number: Param<i32>) -> ApiOutcome<Option<VehicleDto>> {
    let Path(policy_number) = match policy_number { Ok(p) => p, Err(r) => return r.into() };
    portal.get_vehicle_details(policy_number).await.into()
}

#[utoipa::path(
    delete, path = "/portal/policies/{policy_number}", tag = "portal",
    params(("policy_number" = i32, Path, description = "Policy number")),
    responses(
        (status = 200, description = "Deleted Successfully", body = String),
        (status = 400, description = "Nothing deleted, or failure text", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete_policy_number(State(portal): State<PortalController>, policy_number: Param<i32>) -> ApiOutcome<String> {
    let Path(policy_number) = match policy_number { Ok(p) => p, Err(r) => return r.into() };
    portal.delete_policy_number(policy_number).await.into()
}
