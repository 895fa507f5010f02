//! Error types for the fetch layer.

use thiserror::Error;

/// What can go wrong while fetching one day of rates. All three variants are
/// fatal to the whole run; a day that simply has no usable data is not an
/// error and never reaches this type.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),
}
