//! # Error Types

/// Errors from toksmith operations.
#[derive(Debug, thiserror::Error)]
pub enum ToksmithError {
    /// A rule was registered with an empty pattern.
    #[error("invalid pattern: patterns must be non-empty")]
    InvalidPattern,

    /// The tokenizer options are inconsistent.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The pattern automaton could not be built.
    #[error(transparent)]
    Automaton(#[from] aho_corasick::BuildError),
}

/// Result type for toksmith operations.
pub type TSResult<T> = core::result::Result<T, ToksmithError>;
