use casekit_domain::value_objects::PresetData;
use rocket::serde::json::Json;
use rocket::{State, get};

use crate::models::ApiResponse;
use crate::transport::http::ApiState;

/// Preset steps, the component palette and per-type default params
#[get("/api/preset-data")]
pub fn get_preset_data(state: &State<ApiState>) -> Json<ApiResponse<PresetData>> {
    Json(ApiResponse::ok(state.catalog.preset_data().clone()))
}
