/// Convenience result type used across fireglyph.
pub type FireResult<T> = Result<T, FireError>;

/// Top-level error taxonomy used by the rendering APIs.
#[derive(thiserror::Error, Debug)]
pub enum FireError {
    /// The identifier cannot be turned into generator state.
    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    /// Invalid user-provided settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while encoding a rendered frame.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FireError {
    /// Build a [`FireError::InvalidSeed`] value.
    pub fn invalid_seed(msg: impl Into<String>) -> Self {
        Self::InvalidSeed(msg.into())
    }

    /// Build a [`FireError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FireError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
