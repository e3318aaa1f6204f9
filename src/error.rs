use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading and parsing a restaurant listing.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read listing{}: {}", display_path(.path), .source)]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Listing has {line_count} lines, which is not a multiple of {block_size}; record {record} is incomplete"
    )]
    TruncatedListing {
        line_count: usize,
        block_size: usize,
        record: usize,
    },

    #[error("Record {record} ('{name}') has a rating that is not an integer: '{found}'")]
    InvalidRating {
        record: usize,
        name: String,
        found: String,
    },

    #[error("Record {record} ('{name}') has an unrecognized price tier: '{found}'")]
    UnknownPriceTier {
        record: usize,
        name: String,
        found: String,
    },
}

/// Errors that can occur while answering a recommendation query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown price tier '{0}', expected one of $, $$, $$$, $$$$")]
    UnknownPriceTier(String),

    #[error("Restaurant '{0}' is indexed by price or cuisine but has no rating")]
    Inconsistent(String),
}

/// Errors that can occur while loading a `RecommendConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Any failure of the load-and-query pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" '{}'", p.display()))
        .unwrap_or_default()
}
