/// Convenience result type used across dotline.
pub type DotlineResult<T> = Result<T, DotlineError>;

/// Top-level error taxonomy used by the widget and configuration APIs.
#[derive(thiserror::Error, Debug)]
pub enum DotlineError {
    /// A rejected assignment or invalid configuration document.
    #[error("validation error: {0}")]
    Validation(String),

    /// Raised by [`crate::ShapeRenderer`] implementations that cannot draw a dot.
    ///
    /// The schedule and sampling functions never return it.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from a host renderer or dependency.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DotlineError {
    /// Build a [`DotlineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DotlineError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`DotlineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for DotlineError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
