mod common;

use common::*;
use halfkey_core::{KeyCode, KeyProcessor, MirrorMap, TransitionKind, VirtualKey};
use quickcheck::{quickcheck, Arbitrary, Gen};

const SPACE: KeyCode = VirtualKey::Space.code();

/// A transition on a key other than space
#[derive(Debug, Clone)]
struct OtherKey {
    key: KeyCode,
    kind: TransitionKind,
}

impl Arbitrary for OtherKey {
    fn arbitrary(g: &mut Gen) -> Self {
        // Mostly physical key codes, occasionally anything at all
        let key = if bool::arbitrary(g) {
            u16::arbitrary(g) % 0x80
        } else {
            u16::arbitrary(g)
        };
        let key = if key == SPACE { SPACE + 1 } else { key };
        let kind = *g
            .choose(&[TransitionKind::KeyDown, TransitionKind::KeyUp, TransitionKind::FlagsChanged])
            .unwrap();
        OtherKey { key, kind }
    }
}

/// Any transition, space included
#[derive(Debug, Clone)]
struct AnyKey {
    key: KeyCode,
    kind: TransitionKind,
}

impl Arbitrary for AnyKey {
    fn arbitrary(g: &mut Gen) -> Self {
        let other = OtherKey::arbitrary(g);
        let key = if u8::arbitrary(g) % 4 == 0 { SPACE } else { other.key };
        AnyKey { key, kind: other.kind }
    }
}

quickcheck! {
    fn idle_processing_is_identity(keys: Vec<OtherKey>) -> bool {
        let mut processor = KeyProcessor::new();
        keys.iter().all(|input| {
            let delivered = send(&mut processor, input.key, input.kind).into_delivery_order();
            delivered.len() == 1
                && delivered[0].key == input.key
                && delivered[0].kind == input.kind
                && !delivered[0].synthetic
        })
    }

    fn unmapped_keys_pass_through_while_chording(input: OtherKey) -> bool {
        if MirrorMap::standard().lookup(input.key).is_some() {
            return true;
        }
        let mut processor = KeyProcessor::new();
        send(&mut processor, SPACE, KeyDown);

        let delivered = send(&mut processor, input.key, input.kind).into_delivery_order();
        delivered.len() == 1 && delivered[0].key == input.key && delivered[0].kind == input.kind
    }

    fn output_keys_derive_from_input(inputs: Vec<AnyKey>) -> bool {
        let mut processor = KeyProcessor::new();
        inputs.iter().all(|input| {
            let mirrored = MirrorMap::standard().lookup(input.key);
            send(&mut processor, input.key, input.kind)
                .into_delivery_order()
                .iter()
                .all(|event| event.key == input.key || Some(event.key) == mirrored)
        })
    }

    fn typed_flag_never_outlives_space(inputs: Vec<AnyKey>) -> bool {
        let mut processor = KeyProcessor::new();
        inputs.iter().all(|input| {
            send(&mut processor, input.key, input.kind);
            let state = processor.state();
            (state.is_space_down || !state.typed_character_while_space_was_down)
                && !state.keys_held_outside_chord.contains(&SPACE)
        })
    }

    fn chord_repeats_identically(first: OtherKey, second: OtherKey) -> bool {
        let mut processor = KeyProcessor::new();
        let mut round = || {
            let mut delivered = Vec::new();
            for (key, kind) in [
                (SPACE, KeyDown),
                (first.key, first.kind),
                (second.key, second.kind),
                (SPACE, KeyUp),
            ] {
                delivered.extend(send(&mut processor, key, kind).into_delivery_order());
            }
            delivered
        };
        round() == round()
    }
}
