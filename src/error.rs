//! Error types for this crate.
//!
//! All fallible operations return [`Result<T>`] which uses [`PipelineError`] as the error type.

use std::path::PathBuf;

use thiserror::Error;

/// A [`Result`](std::result::Result) alias using [`PipelineError`] as the error type.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// The unified error type for all crate errors.
///
/// # Example
///
/// ```rust
/// use review_pipelines::error::PipelineError;
///
/// fn handle_error(e: PipelineError) {
///     match &e {
///         PipelineError::Io { path, .. } => {
///             // Bad input path - fix and retry
///             eprintln!("cannot read {}", path.display());
///         }
///         PipelineError::ResourceUnavailable { resource, .. } => {
///             // Lexicon file missing or corrupt - reinstall data files
///             eprintln!("missing resource: {resource}");
///         }
///         PipelineError::Vocabulary(_) | PipelineError::Template(_) => {
///             // Data file content is invalid - fix the file
///         }
///         _ => {
///             // Future error variants
///         }
///     }
/// }
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PipelineError {
    /// A file could not be read.
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A linguistic resource failed to initialize and was queried anyway.
    #[error("Linguistic resource '{resource}' is unavailable: {reason}")]
    ResourceUnavailable {
        /// Name of the resource (e.g. `valence`, `pos_lexicon`).
        resource: &'static str,
        /// Why initialization failed.
        reason: String,
    },

    /// Stopword, blacklist or synonym data is invalid.
    #[error("Invalid vocabulary: {0}")]
    Vocabulary(String),

    /// Summary template failed to parse or render.
    #[error("Template error: {0}")]
    Template(String),

    /// Invalid pipeline parameters.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PipelineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PipelineError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(value: serde_json::Error) -> Self {
        PipelineError::InvalidConfig(value.to_string())
    }
}

impl From<minijinja::Error> for PipelineError {
    fn from(value: minijinja::Error) -> Self {
        PipelineError::Template(value.to_string())
    }
}
