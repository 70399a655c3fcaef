//! macOS event tap integration for HalfKey
//!
//! This crate owns the system side of interception: it installs a Quartz
//! event tap, feeds every keyboard transition to a fresh
//! [`halfkey_core::KeyProcessor`] and delivers what the processor returns.
//! On other platforms the types exist but starting interception fails with
//! [`Error::Unsupported`].

mod error;
mod event_handler;
pub mod permissions;

#[cfg(target_os = "macos")]
mod tap;
#[cfg(target_os = "macos")]
mod tap_event;

pub use error::{Error, Result};
pub use event_handler::{EventHandler, Mode};

#[cfg(target_os = "macos")]
pub use tap_event::TapEvent;
