use thiserror::Error;

/// Configuration problems detected while building the widget. Nothing can fail
/// after these checks pass, so this is the crate's only error type.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("prize list is empty")]
    NoPrizes,
    #[error("prize #{index} ({label:?}) has invalid weight {weight}; weights must be finite and > 0")]
    InvalidWeight {
        index: usize,
        label: String,
        weight: f64,
    },
    #[error("sum of prize weights is not a finite positive number ({total})")]
    InvalidTotal { total: f64 },
    #[error("widget needs at least one selectable option")]
    NoOptions,
    #[error("confetti count {count} exceeds the limit of {max}")]
    TooMuchConfetti { count: usize, max: usize },
    #[cfg(feature = "serde_json")]
    #[error("invalid widget config JSON: {0}")]
    Json(String),
}

#[cfg(feature = "serde_json")]
impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err.to_string())
    }
}
