//! History search handler

use casekit_domain::value_objects::SearchQuery;
use rocket::serde::json::Json;
use rocket::{State, post};
use tracing::debug;

use crate::models::SearchHistoryResponse;
use crate::transport::http::ApiState;

/// Search historical test cases by name
///
/// Missing filters default to `all` / `keyword` / empty text, and `null` is
/// echoed as `null`. Only the text narrows the result; the library and method
/// are echoed in `filters` whatever JSON value they carry.
/// The body is parsed as JSON whatever its `Content-Type`; a body that does
/// not parse is rejected by Rocket's default catchers.
#[post("/api/search-history-cases", data = "<request>")]
pub fn search_history_cases(
    state: &State<ApiState>,
    request: Json<SearchQuery>,
) -> Json<SearchHistoryResponse> {
    let query = request.into_inner();
    let results = state.catalog.search_history_cases(&query);

    debug!(
        case_library = %query.case_library,
        search_method = %query.search_method,
        search_text = ?query.search_text,
        matches = results.len(),
        "History search"
    );

    Json(SearchHistoryResponse::ok(results, query))
}
