//! Helpers shared by the processor tests

#![allow(dead_code)]

use halfkey_core::{InputEvent, KeyCode, KeyProcessor, OutputEvents, PlatformEvent, TransitionKind, VirtualKey};
use pretty_assertions::assert_eq;

pub use TransitionKind::{FlagsChanged, KeyDown, KeyUp};

/// Stand-in for a platform event that remembers whether it was synthesized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestEvent {
    pub key: KeyCode,
    pub kind: TransitionKind,
    pub synthetic: bool,
}

impl TestEvent {
    pub fn original(key: impl Into<KeyCode>, kind: TransitionKind) -> Self {
        Self {
            key: key.into(),
            kind,
            synthetic: false,
        }
    }
}

impl PlatformEvent for TestEvent {
    fn cloned_with(&self, key: KeyCode, kind: TransitionKind) -> Option<Self> {
        Some(TestEvent {
            key,
            kind,
            synthetic: true,
        })
    }
}

/// Platform event whose copies can never be constructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnclonableEvent {
    pub key: KeyCode,
    pub kind: TransitionKind,
}

impl PlatformEvent for UnclonableEvent {
    fn cloned_with(&self, _key: KeyCode, _kind: TransitionKind) -> Option<Self> {
        None
    }
}

/// Send one transition through the processor
pub fn send(processor: &mut KeyProcessor, key: impl Into<KeyCode>, kind: TransitionKind) -> OutputEvents<TestEvent> {
    let key = key.into();
    processor.process(InputEvent::new(key, kind, TestEvent::original(key, kind)))
}

/// Send one transition and compare the delivered `(key, kind)` sequence
#[track_caller]
pub fn assert_emits(
    processor: &mut KeyProcessor,
    key: VirtualKey,
    kind: TransitionKind,
    expected: &[(VirtualKey, TransitionKind)],
) {
    let delivered: Vec<(KeyCode, TransitionKind)> = send(processor, key, kind)
        .into_delivery_order()
        .into_iter()
        .map(|event| (event.key, event.kind))
        .collect();
    let expected: Vec<(KeyCode, TransitionKind)> = expected
        .iter()
        .map(|&(key, kind)| (key.code(), kind))
        .collect();

    assert_eq!(delivered, expected, "after {:?} {}", key, kind);
}

/// Type `key` as a full down/up pair inside a fresh chord
pub fn chord(processor: &mut KeyProcessor, key: VirtualKey, mirrored: VirtualKey) {
    assert_emits(processor, VirtualKey::Space, KeyDown, &[]);
    assert_emits(processor, key, KeyDown, &[(mirrored, KeyDown)]);
    assert_emits(processor, key, KeyUp, &[(mirrored, KeyUp)]);
    assert_emits(processor, VirtualKey::Space, KeyUp, &[]);
}
