use thiserror::Error;

/// Errors that can occur while obtaining or processing document input.
///
/// Note that a failed validation is not an error — it is the engine's
/// regular output, a [`ValidationResult`](super::ValidationResult) with
/// `is_valid = false`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BelegError {
    /// The text source could not produce text for a document.
    #[error("failed to read document {path}: {message}")]
    Source {
        /// Path of the document as given to the source.
        path: String,
        /// Source-specific failure description.
        message: String,
    },
}

impl BelegError {
    /// Create a source failure for the given document path.
    pub fn source(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Source {
            path: path.into(),
            message: message.into(),
        }
    }
}
