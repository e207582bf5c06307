use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(utoipa::ToSchema)]
pub struct LoginRequest { pub username: String, pub password: String }

#[derive(utoipa::ToSchema)]
pub struct AttachPolicyRequest { pub policy_number: i32, pub chassis_number: String }

#[derive(utoipa::ToSchema)]
pub struct PortalUserDoc {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    /// RFC 3339 timestamp
    pub created_at: String,
}

#[derive(utoipa::ToSchema)]
pub struct UserPolicyListDoc {
    pub id: Uuid,
    pub user_id: Uuid,
    pub policy_number: i32,
    pub created_at: String,
}

#[derive(utoipa::ToSchema)]
pub struct VehicleDoc {
    pub policy_number: i32,
    pub registration_number: String,
    pub chassis_number: String,
    pub engine_number: String,
    pub brand: String,
    pub model: String,
    pub variant: Option<String>,
    pub fuel_type: String,
    pub body_type: Option<String>,
    pub transmission_type: Option<String>,
    pub vehicle_type: String,
    pub rto_code: String,
    /// "City, State"
    pub rto_location: String,
    pub colour: Option<String>,
    pub manufacture_year: i32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::portal::login,
        crate::routes::portal::add_policy_number,
        crate::routes::portal::get_policy_numbers,
        crate::routes::portal::get_vehicle_details,
        crate::routes::portal::delete_policy_number,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            LoginRequest,
            AttachPolicyRequest,
            PortalUserDoc,
            UserPolicyListDoc,
            VehicleDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "portal")
    )
)]
pub struct ApiDoc;
