use winit::keyboard::KeyCode;

/// Errors produced while validating a [`ZoomConfig`](crate::ZoomConfig).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("config value '{0}' must be a finite number")]
    NotFinite(&'static str),

    #[error("config value '{0}' must not be negative")]
    Negative(&'static str),

    #[error("FOV caps must be positive, got min {0}")]
    NonPositiveCap(f32),

    #[error("min FOV cap {min} is greater than max FOV cap {max}")]
    CapsOutOfOrder { min: f32, max: f32 },

    #[error("key {0:?} is reserved for pausing and can't be the zoom key")]
    ReservedKey(KeyCode),
}

/// Errors returned by a [`Scene`](crate::Scene) when a named host object can't be used.
///
/// These are "not ready yet" conditions; callers log them and retry on a later frame.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("object '{0}' not found in scene")]
    ObjectNotFound(String),

    #[error("object '{object}' has no {component} component")]
    MissingComponent {
        object: String,
        component: &'static str,
    },
}
