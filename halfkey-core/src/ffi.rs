//! Foreign Function Interface for HalfKey Core
//!
//! This module provides a C-compatible API so a host written in another
//! language (e.g. a Swift menu-bar app owning the event tap) can drive the
//! key processor. The host rebuilds platform events from the returned
//! key codes.

use crate::{InputEvent, KeyProcessor, KeyStroke, MirrorMap, TransitionKind};
use std::os::raw::{c_char, c_int};

/// Most pre-events a single transition can produce
pub const HALFKEY_MAX_PRE_EVENTS: usize = 2;

/// Opaque handle to a key processor instance
pub struct ProcessorHandle {
    processor: KeyProcessor,
}

/// Result codes for FFI functions
#[repr(C)]
#[derive(Debug, PartialEq)]
pub enum HalfKeyResult {
    Success = 0,
    ErrorInvalidHandle = -1,
    ErrorInvalidParameter = -2,
    ErrorTooManyEvents = -3,
}

/// One event to deliver
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HalfKeyEvent {
    pub key_code: u16,
    /// 0=KeyDown, 1=KeyUp, 2=FlagsChanged
    pub kind: c_int,
}

/// Output from processing one transition
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HalfKeyOutput {
    /// Number of valid entries in `pre_events`
    pub pre_event_count: c_int,
    /// Events to post before the main event, in order
    pub pre_events: [HalfKeyEvent; HALFKEY_MAX_PRE_EVENTS],
    /// Whether `main_event` is valid (0 = swallow the original event)
    pub has_main_event: c_int,
    pub main_event: HalfKeyEvent,
}

impl From<KeyStroke> for HalfKeyEvent {
    fn from(stroke: KeyStroke) -> Self {
        Self {
            key_code: stroke.key,
            kind: stroke.kind.as_raw(),
        }
    }
}

/// Creates a new processor instance
#[no_mangle]
pub extern "C" fn halfkey_processor_new() -> *mut ProcessorHandle {
    let handle = Box::new(ProcessorHandle {
        processor: KeyProcessor::new(),
    });
    Box::into_raw(handle)
}

/// Frees a processor instance
#[no_mangle]
pub extern "C" fn halfkey_processor_free(handle: *mut ProcessorHandle) {
    if !handle.is_null() {
        unsafe {
            let _ = Box::from_raw(handle);
        }
    }
}

/// Processes one key transition
///
/// Must be called once per transition, in order, from a single thread.
#[no_mangle]
pub extern "C" fn halfkey_processor_process(
    handle: *mut ProcessorHandle,
    key_code: u16,
    kind: c_int,
    output: *mut HalfKeyOutput,
) -> HalfKeyResult {
    if handle.is_null() {
        return HalfKeyResult::ErrorInvalidHandle;
    }
    if output.is_null() {
        return HalfKeyResult::ErrorInvalidParameter;
    }

    let Ok(kind) = TransitionKind::try_from(kind) else {
        return HalfKeyResult::ErrorInvalidParameter;
    };

    let handle = unsafe { &mut *handle };
    let output = unsafe { &mut *output };
    *output = HalfKeyOutput::default();

    let result = handle
        .processor
        .process(InputEvent::from(KeyStroke::new(key_code, kind)));

    if result.pre_events.len() > HALFKEY_MAX_PRE_EVENTS {
        return HalfKeyResult::ErrorTooManyEvents;
    }

    for (slot, stroke) in output.pre_events.iter_mut().zip(result.pre_events.iter()) {
        *slot = HalfKeyEvent::from(*stroke);
    }
    output.pre_event_count = result.pre_events.len() as c_int;

    if let Some(main) = result.main_event {
        output.has_main_event = 1;
        output.main_event = main.into();
    }

    HalfKeyResult::Success
}

/// Resets the processor to its initial state
#[no_mangle]
pub extern "C" fn halfkey_processor_reset(handle: *mut ProcessorHandle) -> HalfKeyResult {
    if handle.is_null() {
        return HalfKeyResult::ErrorInvalidHandle;
    }

    let handle = unsafe { &mut *handle };
    handle.processor.reset();
    HalfKeyResult::Success
}

/// Looks up the mirror of a key code
///
/// Returns 1 and writes the mirrored code to `out` when the key has a
/// mirror, 0 otherwise.
#[no_mangle]
pub extern "C" fn halfkey_mirror_lookup(key_code: u16, out: *mut u16) -> c_int {
    match MirrorMap::standard().lookup(key_code) {
        Some(mirrored) => {
            if !out.is_null() {
                unsafe {
                    *out = mirrored;
                }
            }
            1
        }
        None => 0,
    }
}

/// Gets the library version
#[no_mangle]
pub extern "C" fn halfkey_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}
