//! Accessibility permission checks
//!
//! Event taps that modify keystrokes only work for processes the user has
//! added under Privacy & Security > Accessibility.

#[cfg(target_os = "macos")]
mod sys {
    use std::ffi::c_void;

    #[link(name = "ApplicationServices", kind = "framework")]
    extern "C" {
        pub fn AXIsProcessTrusted() -> bool;
        pub fn AXIsProcessTrustedWithOptions(options: *const c_void) -> bool;
        pub static kAXTrustedCheckOptionPrompt: *const c_void;
    }

    #[link(name = "CoreFoundation", kind = "framework")]
    extern "C" {
        pub fn CFDictionaryCreate(
            allocator: *const c_void,
            keys: *const *const c_void,
            values: *const *const c_void,
            num_values: isize,
            key_callbacks: *const c_void,
            value_callbacks: *const c_void,
        ) -> *const c_void;
        pub fn CFRelease(cf: *const c_void);

        pub static kCFTypeDictionaryKeyCallBacks: c_void;
        pub static kCFTypeDictionaryValueCallBacks: c_void;
        pub static kCFBooleanTrue: *const c_void;
    }
}

/// Whether this process may intercept keyboard input
///
/// With `prompt` set, the system shows its permission dialog when the
/// process isn't trusted yet.
#[cfg(target_os = "macos")]
pub fn is_process_trusted(prompt: bool) -> bool {
    use sys::*;

    if !prompt {
        return unsafe { AXIsProcessTrusted() };
    }

    unsafe {
        let keys = [kAXTrustedCheckOptionPrompt];
        let values = [kCFBooleanTrue];
        let options = CFDictionaryCreate(
            std::ptr::null(),
            keys.as_ptr(),
            values.as_ptr(),
            1,
            &kCFTypeDictionaryKeyCallBacks,
            &kCFTypeDictionaryValueCallBacks,
        );

        let trusted = AXIsProcessTrustedWithOptions(options);
        if !options.is_null() {
            CFRelease(options);
        }
        trusted
    }
}

/// Whether this process may intercept keyboard input
///
/// Always false where keyboard interception isn't supported.
#[cfg(not(target_os = "macos"))]
pub fn is_process_trusted(_prompt: bool) -> bool {
    false
}
