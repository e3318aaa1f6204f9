use crate::error::ConfigError;
use crate::query::{DuplicatePolicy, SortOrder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Listing file read when no other path is given.
pub const DEFAULT_LISTING_PATH: &str = "restaurants.txt";

/// Settings for a recommendation query.
///
/// Every field has a default, so a JSON config only needs the keys it changes:
///
/// ```json
/// { "listing_path": "data/toronto.txt", "order": "descending" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Listing file to load for each query.
    pub listing_path: PathBuf,
    /// Reject price tiers other than `$`..`$$$$` instead of returning nothing.
    pub strict_price: bool,
    /// Handling of restaurants that match several requested cuisines.
    pub duplicates: DuplicatePolicy,
    /// Direction of the sort by rating.
    pub order: SortOrder,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            listing_path: PathBuf::from(DEFAULT_LISTING_PATH),
            strict_price: true,
            duplicates: DuplicatePolicy::Keep,
            order: SortOrder::Ascending,
        }
    }
}

impl RecommendConfig {
    /// Load a config from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
