//! Defines the error types for sidebar assembly.

use docbar_traits::DomError;
use thiserror::Error;

/// The main error enum for all assembly operations.
#[derive(Error, Debug)]
pub enum SidebarError {
    #[error("Document error: {0}")]
    Dom(#[from] DomError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}
