use rocket::get;
use rocket::serde::json::Json;

use crate::models::HealthResponse;

/// Liveness probe
#[get("/health")]
pub fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
