/// Convenience result type used across Splashwave.
pub type SplashResult<T> = Result<T, SplashError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum SplashError {
    /// Invalid configuration or loading text (too long, empty, bad constants).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A required render target or named element is absent.
    #[error("missing resource: {0}")]
    MissingResource(String),

    /// An operation was attempted on a session in an invalid state.
    #[error("animation state error: {0}")]
    AnimationState(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SplashError {
    /// Build a [`SplashError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`SplashError::MissingResource`] value.
    pub fn missing_resource(msg: impl Into<String>) -> Self {
        Self::MissingResource(msg.into())
    }

    /// Build a [`SplashError::AnimationState`] value.
    pub fn animation_state(msg: impl Into<String>) -> Self {
        Self::AnimationState(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
