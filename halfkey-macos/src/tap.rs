// Quartz event tap session driving a KeyProcessor
//
// The tap runs on its own thread with its own run loop. The thread owns the
// tap context (key processor plus mach port) for the whole session and
// frees it after the run loop exits.

use std::ffi::c_void;
use std::mem::ManuallyDrop;
use std::ptr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use core_foundation::base::TCFType;
use core_foundation::mach_port::{CFMachPort, CFMachPortRef};
use core_foundation::runloop::{kCFRunLoopDefaultMode, CFRunLoop};
use core_graphics::event::{
    CGEvent, CGEventTapLocation, CGEventTapOptions, CGEventTapPlacement, CGEventTapProxy,
    CGEventType,
};
use foreign_types::ForeignType;
use halfkey_core::{InputEvent, KeyProcessor, TransitionKind};
use log::{error, info, trace, warn};

use crate::error::{Error, Result};
use crate::tap_event::TapEvent;

type CGEventMask = u64;

type TapCallback = unsafe extern "C" fn(
    proxy: CGEventTapProxy,
    event_type: CGEventType,
    event: *mut c_void,
    user_info: *mut c_void,
) -> *mut c_void;

#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {
    fn CGEventTapCreate(
        tap: CGEventTapLocation,
        place: CGEventTapPlacement,
        options: CGEventTapOptions,
        events_of_interest: CGEventMask,
        callback: TapCallback,
        user_info: *mut c_void,
    ) -> CFMachPortRef;

    fn CGEventTapEnable(tap: CFMachPortRef, enable: bool);
}

#[link(name = "CoreFoundation", kind = "framework")]
extern "C" {
    fn CFMachPortInvalidate(port: CFMachPortRef);
}

/// How often the tap thread checks whether it should stop
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// State reachable from the tap callback
struct TapContext {
    processor: KeyProcessor,
    port: CFMachPortRef,
}

/// A running tap and the thread that services it
pub(crate) struct TapSession {
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl TapSession {
    /// Install the tap and wait until it is either live or has failed
    pub(crate) fn start() -> Result<Self> {
        let running = Arc::new(AtomicBool::new(true));
        let (ready_tx, ready_rx) = mpsc::channel();

        let thread_running = running.clone();
        let thread = thread::Builder::new()
            .name("halfkey-event-tap".to_string())
            .spawn(move || run_tap_loop(thread_running, ready_tx))
            .map_err(|e| Error::Thread(e.to_string()))?;

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(Self {
                running,
                thread: Some(thread),
            }),
            Ok(Err(e)) => {
                let _ = thread.join();
                Err(e)
            }
            Err(_) => {
                let _ = thread.join();
                Err(Error::Thread("event tap thread exited before reporting".to_string()))
            }
        }
    }

    pub(crate) fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst) && self.thread.is_some()
    }

    pub(crate) fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                error!("Event tap thread panicked");
            }
        }
    }
}

impl Drop for TapSession {
    fn drop(&mut self) {
        self.stop();
    }
}

fn transition_kind(event_type: CGEventType) -> Option<TransitionKind> {
    match event_type {
        CGEventType::KeyDown => Some(TransitionKind::KeyDown),
        CGEventType::KeyUp => Some(TransitionKind::KeyUp),
        CGEventType::FlagsChanged => Some(TransitionKind::FlagsChanged),
        _ => None,
    }
}

/// Tap callback
///
/// Returning the incoming pointer passes the event on, returning another
/// event replaces it and returning null swallows it.
unsafe extern "C" fn tap_callback(
    proxy: CGEventTapProxy,
    event_type: CGEventType,
    event_ref: *mut c_void,
    user_info: *mut c_void,
) -> *mut c_void {
    if user_info.is_null() {
        return event_ref;
    }
    let context = &mut *(user_info as *mut TapContext);

    if matches!(
        event_type,
        CGEventType::TapDisabledByTimeout | CGEventType::TapDisabledByUserInput
    ) {
        warn!("Event tap was disabled by the system, re-enabling");
        if !context.port.is_null() {
            CGEventTapEnable(context.port, true);
        }
        return event_ref;
    }

    let Some(kind) = transition_kind(event_type) else {
        return event_ref;
    };
    if event_ref.is_null() {
        return event_ref;
    }

    // The system keeps its reference to the incoming event
    let original = ManuallyDrop::new(CGEvent::from_ptr(event_ref as *mut _));
    let event = TapEvent::new((*original).clone());
    let key = event.key_code();

    #[cfg(debug_assertions)]
    log::debug!("0x{:02x} {} flags: {}", key, kind, event.modifier_flags().human_readable());

    let output = context.processor.process(InputEvent::new(key, kind, event));
    trace!("0x{:02x} {} -> {} event(s)", key, kind, output.len());

    for pre_event in &output.pre_events {
        trace!("Posting pre-event 0x{:02x}", pre_event.key_code());
        pre_event.post_from_tap(proxy);
    }

    match output.main_event {
        Some(main) => {
            let main = main.into_inner();
            if main.as_ptr() == original.as_ptr() {
                // Releases the retain taken by the clone above
                drop(main);
                event_ref
            } else {
                ManuallyDrop::new(main).as_ptr() as *mut c_void
            }
        }
        None => ptr::null_mut(),
    }
}

fn run_tap_loop(running: Arc<AtomicBool>, ready: mpsc::Sender<Result<()>>) {
    let event_mask: CGEventMask = (1 << CGEventType::KeyDown as u64)
        | (1 << CGEventType::KeyUp as u64)
        | (1 << CGEventType::FlagsChanged as u64);

    let context = Box::into_raw(Box::new(TapContext {
        processor: KeyProcessor::new(),
        port: ptr::null_mut(),
    }));

    let port_ref = unsafe {
        CGEventTapCreate(
            CGEventTapLocation::Session,
            CGEventTapPlacement::HeadInsertEventTap,
            CGEventTapOptions::Default,
            event_mask,
            tap_callback,
            context as *mut c_void,
        )
    };

    if port_ref.is_null() {
        error!("Failed to create event tap");
        unsafe {
            drop(Box::from_raw(context));
        }
        let _ = ready.send(Err(Error::TapCreation));
        return;
    }

    unsafe {
        (*context).port = port_ref;
    }
    let port = unsafe { CFMachPort::wrap_under_create_rule(port_ref) };

    let source = match port.create_runloop_source(0) {
        Ok(source) => source,
        Err(_) => {
            error!("Failed to create run loop source for the event tap");
            unsafe {
                CFMachPortInvalidate(port_ref);
            }
            drop(port);
            unsafe {
                drop(Box::from_raw(context));
            }
            let _ = ready.send(Err(Error::RunLoopSource));
            return;
        }
    };

    let run_loop = CFRunLoop::get_current();
    run_loop.add_source(&source, unsafe { kCFRunLoopDefaultMode });
    unsafe {
        CGEventTapEnable(port_ref, true);
    }

    info!("Event tap installed");
    let _ = ready.send(Ok(()));

    while running.load(Ordering::SeqCst) {
        CFRunLoop::run_in_mode(unsafe { kCFRunLoopDefaultMode }, POLL_INTERVAL, false);
    }

    unsafe {
        CGEventTapEnable(port_ref, false);
        CFMachPortInvalidate(port_ref);
    }
    run_loop.remove_source(&source, unsafe { kCFRunLoopDefaultMode });
    drop(source);
    drop(port);

    // No callback can run once the port is invalidated
    unsafe {
        drop(Box::from_raw(context));
    }
    info!("Event tap removed");
}
