//! Error types for faqrank.
//!
//! All fallible operations in the crate return [`Result`], whose error side is
//! the [`FaqError`] enum. Query-time failures are not surfaced through this
//! type: the answer selector folds them into a
//! [`QueryResult::Fallback`](crate::faq::answer::QueryResult) so callers only
//! branch on success versus fallback.
//!
//! # Examples
//!
//! ```
//! use faqrank::error::{FaqError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(FaqError::dataset_load("dataset.json not found"))
//! }
//!
//! match load() {
//!     Ok(_) => println!("loaded"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for faqrank operations.
#[derive(Error, Debug)]
pub enum FaqError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The dataset could not be read or is not a JSON array of items.
    #[error("Dataset load error: {0}")]
    DatasetLoad(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Model fitting failed (empty training set, bad labels, ...)
    #[error("Training error: {0}")]
    Training(String),

    /// The classifier could not produce a label for a query.
    #[error("Intent prediction failed: {0}")]
    IntentPrediction(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with FaqError.
pub type Result<T> = std::result::Result<T, FaqError>;

impl FaqError {
    /// Create a new dataset load error.
    pub fn dataset_load<S: Into<String>>(msg: S) -> Self {
        FaqError::DatasetLoad(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        FaqError::Analysis(msg.into())
    }

    /// Create a new training error.
    pub fn training<S: Into<String>>(msg: S) -> Self {
        FaqError::Training(msg.into())
    }

    /// Create a new intent prediction error.
    pub fn intent_prediction<S: Into<String>>(msg: S) -> Self {
        FaqError::IntentPrediction(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        FaqError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        FaqError::Other(msg.into())
    }
}
