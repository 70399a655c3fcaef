//! Mirror map: which physical key stands in for which while space is held
//!
//! The table is fixed. Letters, the number row and a handful of control keys
//! have a counterpart on the opposite hand; everything else (Return, arrows,
//! function keys, modifiers) has none and is never substituted.

use crate::types::{KeyCode, VirtualKey};

/// Codes at or above this value never have a mirror
const TABLE_SIZE: usize = 0x80;

/// `(typed, substituted)` pairs
pub const MIRROR_PAIRS: &[(VirtualKey, VirtualKey)] = &[
    // Home row
    (VirtualKey::KeyA, VirtualKey::Semicolon),
    (VirtualKey::KeyS, VirtualKey::KeyL),
    (VirtualKey::KeyD, VirtualKey::KeyK),
    (VirtualKey::KeyF, VirtualKey::KeyJ),
    (VirtualKey::KeyG, VirtualKey::KeyH),
    (VirtualKey::KeyH, VirtualKey::KeyG),
    (VirtualKey::KeyJ, VirtualKey::KeyF),
    (VirtualKey::KeyK, VirtualKey::KeyD),
    (VirtualKey::KeyL, VirtualKey::KeyS),
    (VirtualKey::Semicolon, VirtualKey::KeyA),

    // Top row
    (VirtualKey::KeyQ, VirtualKey::KeyP),
    (VirtualKey::KeyW, VirtualKey::KeyO),
    (VirtualKey::KeyE, VirtualKey::KeyI),
    (VirtualKey::KeyR, VirtualKey::KeyU),
    (VirtualKey::KeyT, VirtualKey::KeyY),
    (VirtualKey::KeyY, VirtualKey::KeyT),
    (VirtualKey::KeyU, VirtualKey::KeyR),
    (VirtualKey::KeyI, VirtualKey::KeyE),
    (VirtualKey::KeyO, VirtualKey::KeyW),
    (VirtualKey::KeyP, VirtualKey::KeyQ),

    // Bottom row
    (VirtualKey::KeyZ, VirtualKey::Slash),
    (VirtualKey::KeyX, VirtualKey::Period),
    (VirtualKey::KeyC, VirtualKey::Comma),
    (VirtualKey::KeyV, VirtualKey::KeyM),
    (VirtualKey::KeyB, VirtualKey::KeyN),
    (VirtualKey::KeyN, VirtualKey::KeyB),
    (VirtualKey::KeyM, VirtualKey::KeyV),
    (VirtualKey::Comma, VirtualKey::KeyC),
    (VirtualKey::Period, VirtualKey::KeyX),
    (VirtualKey::Slash, VirtualKey::KeyZ),

    // Control keys
    (VirtualKey::Tab, VirtualKey::Delete),
    (VirtualKey::Backslash, VirtualKey::Tab),

    // Number row. Grave lands on Minus; Minus and Equal both land on Grave.
    (VirtualKey::Grave, VirtualKey::Minus),
    (VirtualKey::Key1, VirtualKey::Key0),
    (VirtualKey::Key2, VirtualKey::Key9),
    (VirtualKey::Key3, VirtualKey::Key8),
    (VirtualKey::Key4, VirtualKey::Key7),
    (VirtualKey::Key5, VirtualKey::Key6),
    (VirtualKey::Key6, VirtualKey::Key5),
    (VirtualKey::Key7, VirtualKey::Key4),
    (VirtualKey::Key8, VirtualKey::Key3),
    (VirtualKey::Key9, VirtualKey::Key2),
    (VirtualKey::Key0, VirtualKey::Key1),
    (VirtualKey::Minus, VirtualKey::Grave),
    (VirtualKey::Equal, VirtualKey::Grave),
];

/// The standard mirror map, shared by every processor
pub static MIRROR_MAP: MirrorMap = MirrorMap::build(MIRROR_PAIRS);

/// Immutable lookup from a key code to its mirrored key code
#[derive(Debug)]
pub struct MirrorMap {
    table: [Option<KeyCode>; TABLE_SIZE],
}

impl MirrorMap {
    const fn build(pairs: &[(VirtualKey, VirtualKey)]) -> Self {
        let mut table = [None; TABLE_SIZE];
        let mut i = 0;
        while i < pairs.len() {
            let (from, to) = pairs[i];
            table[from as usize] = Some(to as KeyCode);
            i += 1;
        }
        Self { table }
    }

    /// The map used by [`crate::KeyProcessor`]
    pub fn standard() -> &'static MirrorMap {
        &MIRROR_MAP
    }

    /// Mirrored counterpart of `key`, or `None` if it has no mirror
    pub fn lookup(&self, key: KeyCode) -> Option<KeyCode> {
        self.table.get(key as usize).copied().flatten()
    }

    /// All `(typed, substituted)` entries in key code order
    pub fn entries(&self) -> impl Iterator<Item = (KeyCode, KeyCode)> + '_ {
        self.table
            .iter()
            .enumerate()
            .filter_map(|(code, target)| target.map(|target| (code as KeyCode, target)))
    }

    /// Number of keys with a mirror
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
