// Error types for flag name parsing

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlagError {
    #[error("Unknown feature flag: {0}")]
    UnknownFlag(String),
}

pub type Result<T> = std::result::Result<T, FlagError>;
