//! HalfKey Engine - space-chord key processor
//!
//! This module provides the state machine that turns the raw key
//! transitions of one interception session into the events to deliver.

mod input;
mod output;
mod processor;
mod state;

pub use input::{InputEvent, KeyStroke, PlatformEvent, TransitionKind};
pub use output::OutputEvents;
pub use processor::KeyProcessor;
pub use state::ProcessorState;

// Re-export error types
pub use crate::error::{Error, Result};
