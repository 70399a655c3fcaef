use log::{trace, warn};

use crate::mirror::MirrorMap;
use crate::types::{KeyCode, VirtualKey};
use super::{InputEvent, OutputEvents, PlatformEvent, ProcessorState, TransitionKind};

const SPACE: KeyCode = VirtualKey::Space.code();

/// The space-chord state machine
///
/// Feed it every key transition, in order, exactly once. While space is
/// held (and nothing else was already held when it went down) each key is
/// replaced by its mirror-image key. A space press with nothing typed in
/// between comes out as an ordinary space when released.
#[derive(Debug)]
pub struct KeyProcessor {
    /// Key substitution table
    mirror_map: &'static MirrorMap,
    /// Current chord state
    state: ProcessorState,
}

impl Default for KeyProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyProcessor {
    /// Create a processor with fresh state and the standard mirror map
    pub fn new() -> Self {
        Self {
            mirror_map: MirrorMap::standard(),
            state: ProcessorState::new(),
        }
    }

    /// Process one key transition
    ///
    /// Never fails: unmapped keys pass through, and if a substitute event
    /// can't be built the original event is delivered instead.
    pub fn process<E: PlatformEvent>(&mut self, event: InputEvent<E>) -> OutputEvents<E> {
        if event.key() == SPACE {
            self.process_space(event)
        } else {
            self.process_other(event)
        }
    }

    fn process_space<E: PlatformEvent>(&mut self, event: InputEvent<E>) -> OutputEvents<E> {
        match event.kind() {
            TransitionKind::KeyDown => {
                if self.state.is_space_down {
                    trace!("space repeat swallowed");
                    return OutputEvents::swallow();
                }
                self.state.is_space_down = true;

                if self.state.has_keys_held_outside_chord() {
                    trace!("space down with {:?} held, passing through", self.state.keys_held_outside_chord);
                    OutputEvents::deliver(event.into_platform())
                } else {
                    trace!("space down swallowed, chord pending");
                    OutputEvents::swallow()
                }
            }
            TransitionKind::KeyUp => {
                self.state.is_space_down = false;

                if self.state.typed_character_while_space_was_down {
                    self.state.typed_character_while_space_was_down = false;
                    trace!("chord released");
                    OutputEvents::swallow()
                } else if self.state.has_keys_held_outside_chord() {
                    self.state.keys_held_outside_chord.clear();
                    trace!("space up passing through");
                    OutputEvents::deliver(event.into_platform())
                } else {
                    self.tap_space(event)
                }
            }
            TransitionKind::FlagsChanged => OutputEvents::deliver(event.into_platform()),
        }
    }

    /// Plain space tap: emit the swallowed down-stroke right before the up-stroke
    fn tap_space<E: PlatformEvent>(&self, event: InputEvent<E>) -> OutputEvents<E> {
        match event.platform().cloned_with(SPACE, TransitionKind::KeyDown) {
            Some(key_down) => {
                trace!("space tapped");
                OutputEvents::deliver(event.into_platform()).with_pre_event(key_down)
            }
            None => {
                warn!("Failed to synthesize space key down, passing key up through");
                OutputEvents::deliver(event.into_platform())
            }
        }
    }

    fn process_other<E: PlatformEvent>(&mut self, event: InputEvent<E>) -> OutputEvents<E> {
        let key = event.key();
        let kind = event.kind();

        if !self.state.is_space_down {
            match kind {
                TransitionKind::KeyDown => self.state.note_key_down(key),
                TransitionKind::KeyUp => self.state.note_key_up(key),
                TransitionKind::FlagsChanged => {}
            }
        }

        if kind == TransitionKind::FlagsChanged || !self.state.is_mirroring() {
            trace!("0x{:02x} {} passing through", key, kind);
            return OutputEvents::deliver(event.into_platform());
        }

        self.state.typed_character_while_space_was_down = true;

        let Some(mirrored) = self.mirror_map.lookup(key) else {
            trace!("0x{:02x} has no mirror, passing through", key);
            return OutputEvents::deliver(event.into_platform());
        };

        match event.platform().cloned_with(mirrored, kind) {
            Some(replacement) => {
                trace!("0x{:02x} {} mirrored to 0x{:02x}", key, kind, mirrored);
                OutputEvents::deliver(replacement)
            }
            None => {
                warn!("Failed to synthesize mirrored key 0x{:02x}, passing 0x{:02x} through", mirrored, key);
                OutputEvents::deliver(event.into_platform())
            }
        }
    }

    /// Whether space is currently held as a chord key
    pub fn is_chording(&self) -> bool {
        self.state.is_space_down
    }

    /// Get the current processor state (for debugging)
    pub fn state(&self) -> &ProcessorState {
        &self.state
    }

    /// Reset to the state of a freshly created processor
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
