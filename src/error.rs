use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FirError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FirError>;
