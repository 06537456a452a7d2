use thiserror::Error;

/// Fatal problems with a card configuration, surfaced to the host at setup time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Entity is required")]
    MissingEntity,
}

/// Failures of a locale formatting primitive. Always recovered by the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid currency code: {0}")]
    InvalidCurrency(String),

    #[error("Host formatter failed: {0}")]
    Host(String),
}
