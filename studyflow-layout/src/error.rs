//! Error types for the host-facing adapters.
//!
//! The layout pass itself never fails; only reading configuration and
//! request documents can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate item id: {0}")]
    DuplicateItem(String),
}
