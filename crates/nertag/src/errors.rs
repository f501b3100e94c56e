//! # Error Types

/// Errors from nertag operations.
#[derive(Debug, thiserror::Error)]
pub enum NerError {
    /// A table id does not fit the target id type.
    #[error("id ({id}) for {key:?} exceeds id type capacity")]
    IdOutOfRange {
        /// The offending table key.
        key: String,
        /// The id that did not fit.
        id: u64,
    },

    /// Paired sequences disagree in length.
    #[error("length mismatch: {left} tokens vs {right} labels")]
    LengthMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },

    /// The model returned scores of an unexpected shape.
    #[error("model output shape ({rows}, {cols}) does not match expected ({expected_rows}, >0)")]
    ModelShape {
        /// Rows returned.
        rows: usize,
        /// Columns (labels) returned.
        cols: usize,
        /// Rows required (the sequence length).
        expected_rows: usize,
    },

    /// The model failed to run.
    #[error("model failure: {0}")]
    Model(String),

    /// A predicted token was not found at the highlighter cursor.
    ///
    /// This indicates the tokens did not originate from the rendered text.
    #[error("token {index} ({token:?}) not found at cursor; remaining text: {remaining:?}")]
    HighlightMismatch {
        /// Index of the token in the sequence.
        index: usize,
        /// The token that was expected.
        token: String,
        /// The text remaining at the cursor.
        remaining: String,
    },

    /// Inference was requested before the pipeline was loaded.
    #[error("pipeline not loaded")]
    NotLoaded,

    /// A pipeline was installed into an already loaded slot.
    #[error("pipeline already loaded")]
    AlreadyLoaded,

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Regex construction error.
    #[error(transparent)]
    Regex(#[from] regex::Error),

    /// Parse error (table keys, corpus lines, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for nertag operations.
pub type NTResult<T> = core::result::Result<T, NerError>;
