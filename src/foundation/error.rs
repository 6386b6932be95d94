/// Convenience result type used across domweave.
pub type DomResult<T> = Result<T, DomError>;

/// Error taxonomy for parsing, animation building and tree operations.
///
/// The style and attribute pipelines never surface these to callers: they log the
/// error and fall back to a default. Tree operations on stale handles do return them.
#[derive(thiserror::Error, Debug)]
pub enum DomError {
    /// Invalid handle, missing node or inconsistent tree request.
    #[error("validation error: {0}")]
    Validation(String),

    /// A raw attribute or style value that could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Malformed keyframe input or timing metadata.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DomError {
    /// Build a [`DomError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DomError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`DomError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`DomError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for DomError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
