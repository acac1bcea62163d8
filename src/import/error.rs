//! Error types for the import pipeline.

use std::path::PathBuf;

use thiserror::Error;

use crate::validate::ValidationError;

/// Errors raised while ingesting and applying a JSON payload.
///
/// The file adapter surfaces these directly. The paste adapter wraps them
/// into [`PasteRejection`] so the dialog can render them inline.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Reading the selected file failed
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not well-formed JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is well-formed JSON but matches no accepted shape, or a
    /// matched shape fails its value constraints
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Upgrading one interchange-shape slide to the document shape failed
    #[error("slide {index}: {message}")]
    SlideUpgrade { index: usize, message: String },
}

/// Result alias for import operations
pub type ImportResult<T> = Result<T, ImportError>;

/// Why a pasted payload was turned away.
///
/// Every variant's `Display` is the message the dialog shows under the
/// paste box.
#[derive(Error, Debug)]
pub enum PasteRejection {
    /// Nothing but whitespace was pasted
    #[error("Please paste some JSON content")]
    Empty,

    /// The pasted text is not well-formed JSON
    #[error("Invalid JSON format: {0}")]
    Json(#[source] serde_json::Error),

    /// The pasted JSON failed further down the pipeline
    #[error(transparent)]
    Import(#[from] ImportError),
}
