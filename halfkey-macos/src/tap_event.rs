use std::ffi::c_void;

use core_graphics::event::{CGEvent, CGEventTapProxy, EventField};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
use foreign_types::ForeignType;
use halfkey_core::{KeyCode, ModifierFlags, PlatformEvent, TransitionKind};

#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {
    fn CGEventCreateSourceFromEvent(event: *mut c_void) -> *mut c_void;
}

/// A keyboard event as seen by the event tap
pub struct TapEvent(CGEvent);

impl TapEvent {
    pub fn new(event: CGEvent) -> Self {
        Self(event)
    }

    pub fn key_code(&self) -> KeyCode {
        self.0.get_integer_value_field(EventField::KEYBOARD_EVENT_KEYCODE) as KeyCode
    }

    pub fn modifier_flags(&self) -> ModifierFlags {
        ModifierFlags::from_raw(self.0.get_flags().bits())
    }

    /// Post this event so it reaches the consumers after the tap
    pub fn post_from_tap(&self, proxy: CGEventTapProxy) {
        self.0.post_from_tap(proxy);
    }

    pub fn into_inner(self) -> CGEvent {
        self.0
    }

    /// The source that produced this event, or the HID system state when
    /// the event carries none
    fn source(&self) -> Option<CGEventSource> {
        let source_ref = unsafe { CGEventCreateSourceFromEvent(self.0.as_ptr() as *mut c_void) };
        if source_ref.is_null() {
            CGEventSource::new(CGEventSourceStateID::HIDSystemState).ok()
        } else {
            Some(unsafe { CGEventSource::from_ptr(source_ref as *mut _) })
        }
    }
}

impl PlatformEvent for TapEvent {
    fn cloned_with(&self, key: KeyCode, kind: TransitionKind) -> Option<Self> {
        let key_down = match kind {
            TransitionKind::KeyDown => true,
            TransitionKind::KeyUp => false,
            TransitionKind::FlagsChanged => return None,
        };
        let source = self.source()?;
        CGEvent::new_keyboard_event(source, key, key_down)
            .ok()
            .map(TapEvent)
    }
}
