// crates/wayfare-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the catalog loaders and the trip-planning helpers.
///
/// Search itself never fails: every query, filter and catalog (including an
/// empty one) has a defined result.
#[derive(Debug, Error)]
pub enum WayfareError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed catalog snapshot: {0}")]
    Bincode(#[from] bincode::Error),

    #[cfg(feature = "fetch")]
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid expense: {0}")]
    InvalidExpense(String),

    #[error("no day {0} in this itinerary")]
    UnknownDay(usize),

    #[error("Missing required fields")]
    MissingFields,
}

pub type Result<T> = std::result::Result<T, WayfareError>;
