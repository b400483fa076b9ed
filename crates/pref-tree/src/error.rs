//! Error types for pref-tree

/// Result type for pref-tree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or addressing a preference tree
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Positional access past the end of a sibling collection
    #[error("Index {index} out of range for {len} preferences")]
    OutOfRange { index: usize, len: usize },

    /// Keyed access to a segment that is not present among the siblings
    #[error("Preference segment not found: {segment}")]
    NotFound { segment: String },

    /// Segment rejected at construction time
    #[error("Invalid preference segment '{segment}': {reason}")]
    InvalidSegment { segment: String, reason: String },

    #[error("Failed to parse preference definition: {message}")]
    DefinitionParse { message: String },

    #[error("Failed to serialize preference definition: {message}")]
    DefinitionSerialize { message: String },
}
