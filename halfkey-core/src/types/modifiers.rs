//! Modifier flag masks carried by raw keyboard events

use bitflags::bitflags;

bitflags! {
    /// Quartz `CGEventFlags` modifier bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u64 {
        const CAPS_LOCK = 0x0001_0000;
        const SHIFT = 0x0002_0000;
        const CONTROL = 0x0004_0000;
        const OPTION = 0x0008_0000;
        const COMMAND = 0x0010_0000;
        const NUMERIC_PAD = 0x0020_0000;
        const HELP = 0x0040_0000;
        const FN = 0x0080_0000;
        const NON_COALESCED = 0x0000_0100;
    }
}

/// Display order used by [`ModifierFlags::human_readable`]
const FLAG_NAMES: &[(ModifierFlags, &str)] = &[
    (ModifierFlags::CAPS_LOCK, "Caps Lock"),
    (ModifierFlags::SHIFT, "Shift"),
    (ModifierFlags::CONTROL, "Control"),
    (ModifierFlags::OPTION, "Option"),
    (ModifierFlags::COMMAND, "Command"),
    (ModifierFlags::HELP, "Help"),
    (ModifierFlags::FN, "Fn"),
    (ModifierFlags::NUMERIC_PAD, "Number Pad"),
    (ModifierFlags::NON_COALESCED, "Non-Coalesced"),
];

impl ModifierFlags {
    /// Build from a raw platform mask, ignoring bits we don't name
    pub fn from_raw(bits: u64) -> Self {
        Self::from_bits_truncate(bits)
    }

    /// Names of the set flags joined by spaces, e.g. `"Shift Command"`
    pub fn human_readable(&self) -> String {
        FLAG_NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_flags_render_as_empty_string() {
        assert_eq!(ModifierFlags::empty().human_readable(), "");
    }

    #[test]
    fn flags_render_in_fixed_order() {
        let flags = ModifierFlags::COMMAND | ModifierFlags::SHIFT | ModifierFlags::CAPS_LOCK;
        assert_eq!(flags.human_readable(), "Caps Lock Shift Command");
    }

    #[test]
    fn unknown_bits_are_dropped() {
        let flags = ModifierFlags::from_raw(0x0010_0000 | 0x0000_0001);
        assert_eq!(flags, ModifierFlags::COMMAND);
    }
}
