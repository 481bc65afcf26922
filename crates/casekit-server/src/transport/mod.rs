//! Transport layer
//!
//! The fixture API is served over plain HTTP/JSON.

pub mod http;
