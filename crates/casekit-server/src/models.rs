//! Request and response models for the HTTP API

use casekit_domain::value_objects::{SearchQuery, TestCase};
use serde::{Deserialize, Serialize};

use crate::constants::{HEALTH_MESSAGE, HEALTH_STATUS_OK};

/// Success envelope shared by the `/api` endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always `true`; the endpoints have no failure path
    pub success: bool,
    /// Payload
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload in a success envelope
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// History search result with the effective filters echoed back
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHistoryResponse {
    /// Always `true`
    pub success: bool,
    /// Matching cases in catalog order
    pub data: Vec<TestCase>,
    /// Filters as parsed, with defaults filled in for absent fields
    pub filters: SearchQuery,
}

impl SearchHistoryResponse {
    /// Build a success response
    pub fn ok(data: Vec<TestCase>, filters: SearchQuery) -> Self {
        Self {
            success: true,
            data,
            filters,
        }
    }
}

/// Health probe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` while the server is serving
    pub status: String,
    /// Human readable status
    pub message: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: HEALTH_STATUS_OK.to_string(),
            message: HEALTH_MESSAGE.to_string(),
        }
    }
}
