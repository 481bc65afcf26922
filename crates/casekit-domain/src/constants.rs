//! Domain constants
//!
//! Default values applied when a search request leaves a filter out.

/// Case library used when the request names none
pub const DEFAULT_CASE_LIBRARY: &str = "all";

/// Search method used when the request names none
pub const DEFAULT_SEARCH_METHOD: &str = "keyword";

/// Search text used when the request names none (matches every case)
pub const DEFAULT_SEARCH_TEXT: &str = "";

/// Number of component types known to the registry
pub const COMPONENT_TYPE_COUNT: usize = 11;
