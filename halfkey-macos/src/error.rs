//! Error types for the event tap integration

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Accessibility permission required. Enable it in System Settings > Privacy & Security > Accessibility")]
    PermissionDenied,

    #[error("Failed to create event tap")]
    TapCreation,

    #[error("Failed to create run loop source for the event tap")]
    RunLoopSource,

    #[error("Event tap thread error: {0}")]
    Thread(String),

    #[error("Keyboard interception is only supported on macOS")]
    Unsupported,
}

pub type Result<T> = std::result::Result<T, Error>;
