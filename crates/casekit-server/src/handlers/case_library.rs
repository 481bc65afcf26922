use casekit_domain::value_objects::CaseLibraryOption;
use rocket::serde::json::Json;
use rocket::{State, get};

use crate::models::ApiResponse;
use crate::transport::http::ApiState;

/// Case-library selector entries
#[get("/api/case-library-options")]
pub fn get_case_library_options(
    state: &State<ApiState>,
) -> Json<ApiResponse<Vec<CaseLibraryOption>>> {
    Json(ApiResponse::ok(state.catalog.case_library_options().to_vec()))
}
