pub mod types;
pub mod error;
pub mod mirror;
pub mod engine;
pub mod ffi;

pub use types::*;

// Re-export commonly used types
pub use error::{Error, Result};
pub use mirror::{MirrorMap, MIRROR_MAP};
pub use engine::{
    InputEvent, KeyProcessor, KeyStroke, OutputEvents, PlatformEvent, ProcessorState, TransitionKind,
};
