//! Error types for the unscan library.

use std::io;
use thiserror::Error;

/// Result type alias for unscan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during layout reconstruction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading OCR result files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The OCR result JSON could not be deserialized.
    #[error("OCR result parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The OCR data violates the expected schema.
    #[error("invalid OCR data: {0}")]
    InvalidOcr(String),

    /// An outer box was requested for a set with no boxes.
    #[error("cannot compute the outer box of an empty box set")]
    EmptySet,

    /// An operation required a line with at least one word.
    #[error("line has no words")]
    EmptyLine,

    /// An operation required an item with at least one line.
    #[error("item has no lines")]
    EmptyItem,

    /// Indentation was requested for a line without a column reference.
    #[error("line has no column box; indentation is relative to a column")]
    NoColumn,

    /// A bullet was extracted twice from the same item.
    #[error("item already has a bullet")]
    BulletAlreadyExtracted,

    /// A configured bullet pattern is not a valid regular expression.
    #[error("invalid bullet pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The offending pattern string.
        pattern: String,
        /// The underlying regex error.
        source: regex::Error,
    },
}
