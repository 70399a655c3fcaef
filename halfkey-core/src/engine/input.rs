//! Input representation for the key processor

use std::fmt;

use crate::error::Error;
use crate::types::KeyCode;

/// What happened to the key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    KeyDown,
    KeyUp,
    /// A modifier key (Shift, Control, Option, Command, Fn, Caps Lock) toggled
    FlagsChanged,
}

impl TransitionKind {
    /// Stable numeric encoding used across the C ABI
    pub fn as_raw(self) -> i32 {
        match self {
            TransitionKind::KeyDown => 0,
            TransitionKind::KeyUp => 1,
            TransitionKind::FlagsChanged => 2,
        }
    }
}

impl TryFrom<i32> for TransitionKind {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TransitionKind::KeyDown),
            1 => Ok(TransitionKind::KeyUp),
            2 => Ok(TransitionKind::FlagsChanged),
            other => Err(Error::InvalidTransitionKind(other)),
        }
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransitionKind::KeyDown => "keyDown",
            TransitionKind::KeyUp => "keyUp",
            TransitionKind::FlagsChanged => "flagsChanged",
        };
        f.write_str(name)
    }
}

/// Handle to the platform's own event object
///
/// The processor never looks inside a platform event. When it needs a
/// different key or transition it asks the handle for a copy. Construction
/// can fail (the platform may be out of resources); `None` tells the
/// processor to fall back to the original event.
pub trait PlatformEvent: Sized {
    fn cloned_with(&self, key: KeyCode, kind: TransitionKind) -> Option<Self>;
}

/// One physical key transition
#[derive(Debug, Clone, PartialEq)]
pub struct InputEvent<E> {
    key: KeyCode,
    kind: TransitionKind,
    platform: E,
}

impl<E> InputEvent<E> {
    pub fn new(key: KeyCode, kind: TransitionKind, platform: E) -> Self {
        Self {
            key,
            kind,
            platform,
        }
    }

    pub fn key(&self) -> KeyCode {
        self.key
    }

    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    pub fn platform(&self) -> &E {
        &self.platform
    }

    /// Give back the platform event, e.g. to deliver it unchanged
    pub fn into_platform(self) -> E {
        self.platform
    }
}

/// Platform-free key event: just a key code and a transition
///
/// Used by hosts that rebuild their own platform events from the output.
/// Cloning one never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyStroke {
    pub key: KeyCode,
    pub kind: TransitionKind,
}

impl KeyStroke {
    pub fn new(key: impl Into<KeyCode>, kind: TransitionKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }

    pub fn down(key: impl Into<KeyCode>) -> Self {
        Self::new(key, TransitionKind::KeyDown)
    }

    pub fn up(key: impl Into<KeyCode>) -> Self {
        Self::new(key, TransitionKind::KeyUp)
    }

    pub fn flags(key: impl Into<KeyCode>) -> Self {
        Self::new(key, TransitionKind::FlagsChanged)
    }
}

impl PlatformEvent for KeyStroke {
    fn cloned_with(&self, key: KeyCode, kind: TransitionKind) -> Option<Self> {
        Some(KeyStroke { key, kind })
    }
}

impl From<KeyStroke> for InputEvent<KeyStroke> {
    fn from(stroke: KeyStroke) -> Self {
        InputEvent::new(stroke.key, stroke.kind, stroke)
    }
}
