use std::collections::HashSet;

use crate::types::KeyCode;

/// Mutable state of a [`super::KeyProcessor`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessorState {
    /// Space is down and was accepted as the start of a chord
    pub is_space_down: bool,
    /// Some key was mirrored since space went down
    pub typed_character_while_space_was_down: bool,
    /// Non-space keys pressed while no chord was active and not yet released
    pub keys_held_outside_chord: HashSet<KeyCode>,
}

impl ProcessorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the fresh-instance state
    pub fn reset(&mut self) {
        self.is_space_down = false;
        self.typed_character_while_space_was_down = false;
        self.keys_held_outside_chord.clear();
    }

    /// Whether any unrelated key is being held across the space press
    pub fn has_keys_held_outside_chord(&self) -> bool {
        !self.keys_held_outside_chord.is_empty()
    }

    pub fn note_key_down(&mut self, key: KeyCode) {
        self.keys_held_outside_chord.insert(key);
    }

    pub fn note_key_up(&mut self, key: KeyCode) {
        self.keys_held_outside_chord.remove(&key);
    }

    /// Space is down with nothing else held, so keys get mirrored
    pub fn is_mirroring(&self) -> bool {
        self.is_space_down && self.keys_held_outside_chord.is_empty()
    }
}
