/// Convenience result type used across the engine.
pub type BoardResult<T> = Result<T, BoardError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every variant is a local, synchronous, recoverable condition; the engine
/// never enters an unrecoverable internal state. Kernel programs are fixed
/// Rust code compiled with the crate, so there is no runtime counterpart to
/// a shader compile/link failure.
#[derive(thiserror::Error, Debug)]
pub enum BoardError {
    /// A zero board dimension was passed to a resize.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// A compute pass or upload was attempted on a zero-sized buffer.
    #[error("empty grid: {0}")]
    EmptyGrid(String),

    /// Uploaded data length does not match the target buffer layout.
    /// The buffer is left unmodified.
    #[error("size mismatch: expected {expected} elements, got {actual}")]
    SizeMismatch {
        /// Element count the target layout requires.
        expected: usize,
        /// Element count that was actually supplied.
        actual: usize,
    },

    /// A snapshot token or document attribute could not be decoded.
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BoardError {
    /// Build a [`BoardError::InvalidDimension`] value.
    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        Self::InvalidDimension(msg.into())
    }

    /// Build a [`BoardError::EmptyGrid`] value.
    pub fn empty_grid(msg: impl Into<String>) -> Self {
        Self::EmptyGrid(msg.into())
    }

    /// Build a [`BoardError::MalformedSnapshot`] value.
    pub fn malformed_snapshot(msg: impl Into<String>) -> Self {
        Self::MalformedSnapshot(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
