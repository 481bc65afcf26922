//! Route handlers
//!
//! Every handler reads the shared [`ApiState`](crate::ApiState) catalog and
//! returns synchronously; none of them can fail once the catalog is loaded.

mod case_library;
mod health;
mod param_schemas;
mod preset;
mod search;

pub use case_library::get_case_library_options;
pub use health::health_check;
pub use param_schemas::get_param_schemas;
pub use preset::get_preset_data;
pub use search::search_history_cases;

use rocket::{Route, routes};

/// All API routes, mounted at `/`
pub fn api_routes() -> Vec<Route> {
    routes![
        get_case_library_options,
        search_history_cases,
        get_preset_data,
        get_param_schemas,
        health_check,
    ]
}
