//! Fixture source configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where fixture tables come from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FixturesConfig {
    /// Directory whose table files replace the embedded tables.
    ///
    /// Tables missing from the directory keep their embedded version.
    pub dir: Option<PathBuf>,
}
