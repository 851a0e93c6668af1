use thiserror::Error;

/// Calendar configuration and serialization errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown timezone identifier: {0}")]
    UnknownTimezone(String),

    #[error("No static VTIMEZONE definition for {0}")]
    UnsupportedTimezone(String),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
