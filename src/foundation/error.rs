/// Convenience result type used across viewcanvas.
pub type ViewResult<T> = Result<T, ViewError>;

/// Top-level error taxonomy used by canvas APIs.
#[derive(thiserror::Error, Debug)]
pub enum ViewError {
    /// Invalid geometry, mismatched buffers or out-of-range settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration data could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Font data could not be loaded or parsed.
    #[error("font error: {0}")]
    Font(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ViewError {
    /// Build a [`ViewError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ViewError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ViewError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
