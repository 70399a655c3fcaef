//! Error types for the HalfKey core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown key name: {0}")]
    UnknownKeyName(String),

    #[error("Invalid transition kind: {0}")]
    InvalidTransitionKind(i32),
}

pub type Result<T> = std::result::Result<T, Error>;
