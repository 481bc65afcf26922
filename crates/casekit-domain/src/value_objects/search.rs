//! History search filters

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::case::TestCase;
use crate::constants::{DEFAULT_CASE_LIBRARY, DEFAULT_SEARCH_METHOD, DEFAULT_SEARCH_TEXT};

/// Filters of a history search, echoed back with the results.
///
/// Only `search_text` narrows the results. `case_library` and
/// `search_method` are carried through untouched, whatever JSON they hold.
/// Absent fields take their defaults; an explicit `null` is kept as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Case library the user picked (`all`, `archived`)
    #[serde(default = "default_case_library")]
    pub case_library: Value,
    /// Search mode the user picked (`keyword`, `semantic`)
    #[serde(default = "default_search_method")]
    pub search_method: Value,
    /// Text matched against case names; `None` when sent as `null`
    #[serde(default = "default_search_text")]
    pub search_text: Option<String>,
}

fn default_case_library() -> Value {
    Value::from(DEFAULT_CASE_LIBRARY)
}

fn default_search_method() -> Value {
    Value::from(DEFAULT_SEARCH_METHOD)
}

#[allow(clippy::unnecessary_wraps)]
fn default_search_text() -> Option<String> {
    Some(DEFAULT_SEARCH_TEXT.to_string())
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            case_library: default_case_library(),
            search_method: default_search_method(),
            search_text: default_search_text(),
        }
    }
}

impl SearchQuery {
    /// Set the name filter
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    /// Set the echoed case library
    pub fn with_case_library(mut self, library: impl Into<Value>) -> Self {
        self.case_library = library.into();
        self
    }

    /// Set the echoed search method
    pub fn with_search_method(mut self, method: impl Into<Value>) -> Self {
        self.search_method = method.into();
        self
    }

    /// Select the cases whose name contains the search text, ignoring case.
    ///
    /// An empty or missing search text selects every case. Input order is kept.
    pub fn apply(&self, cases: &[TestCase]) -> Vec<TestCase> {
        let needle = match self.search_text.as_deref() {
            None | Some("") => return cases.to_vec(),
            Some(text) => text.to_lowercase(),
        };
        cases
            .iter()
            .filter(|case| case.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}
