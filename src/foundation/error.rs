/// Convenience result type used across gnomon.
pub type GnomonResult<T> = Result<T, GnomonError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum GnomonError {
    /// Invalid user-provided scene data or parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while presenting frames or running the render loop.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GnomonError {
    /// Build a [`GnomonError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GnomonError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
