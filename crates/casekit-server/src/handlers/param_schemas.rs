use casekit_domain::value_objects::ParamSchemas;
use rocket::serde::json::Json;
use rocket::{State, get};

use crate::models::ApiResponse;
use crate::transport::http::ApiState;

/// Parameter form schemas keyed by component type
#[get("/api/param-schemas")]
pub fn get_param_schemas(state: &State<ApiState>) -> Json<ApiResponse<ParamSchemas>> {
    Json(ApiResponse::ok(state.catalog.param_schemas().clone()))
}
