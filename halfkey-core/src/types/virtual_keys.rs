use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// Physical key position, as reported by the platform.
pub type KeyCode = u16;

/// Named macOS virtual key codes (`kVK_*`).
///
/// Codes name positions on an ANSI keyboard, not characters: `KeyS` is the
/// key left of `D` whatever the active input source types there.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VirtualKey {
    // Letter keys
    KeyA = 0x00,           // kVK_ANSI_A
    KeyS = 0x01,           // kVK_ANSI_S
    KeyD = 0x02,           // kVK_ANSI_D
    KeyF = 0x03,           // kVK_ANSI_F
    KeyH = 0x04,           // kVK_ANSI_H
    KeyG = 0x05,           // kVK_ANSI_G
    KeyZ = 0x06,           // kVK_ANSI_Z
    KeyX = 0x07,           // kVK_ANSI_X
    KeyC = 0x08,           // kVK_ANSI_C
    KeyV = 0x09,           // kVK_ANSI_V
    KeyB = 0x0B,           // kVK_ANSI_B
    KeyQ = 0x0C,           // kVK_ANSI_Q
    KeyW = 0x0D,           // kVK_ANSI_W
    KeyE = 0x0E,           // kVK_ANSI_E
    KeyR = 0x0F,           // kVK_ANSI_R
    KeyY = 0x10,           // kVK_ANSI_Y
    KeyT = 0x11,           // kVK_ANSI_T
    KeyO = 0x1F,           // kVK_ANSI_O
    KeyU = 0x20,           // kVK_ANSI_U
    KeyI = 0x22,           // kVK_ANSI_I
    KeyP = 0x23,           // kVK_ANSI_P
    KeyL = 0x25,           // kVK_ANSI_L
    KeyJ = 0x26,           // kVK_ANSI_J
    KeyK = 0x28,           // kVK_ANSI_K
    KeyN = 0x2D,           // kVK_ANSI_N
    KeyM = 0x2E,           // kVK_ANSI_M

    // Number row
    Key1 = 0x12,           // kVK_ANSI_1
    Key2 = 0x13,           // kVK_ANSI_2
    Key3 = 0x14,           // kVK_ANSI_3
    Key4 = 0x15,           // kVK_ANSI_4
    Key6 = 0x16,           // kVK_ANSI_6
    Key5 = 0x17,           // kVK_ANSI_5
    Equal = 0x18,          // kVK_ANSI_Equal
    Key9 = 0x19,           // kVK_ANSI_9
    Key7 = 0x1A,           // kVK_ANSI_7
    Minus = 0x1B,          // kVK_ANSI_Minus
    Key8 = 0x1C,           // kVK_ANSI_8
    Key0 = 0x1D,           // kVK_ANSI_0
    Grave = 0x32,          // kVK_ANSI_Grave

    // Punctuation
    RightBracket = 0x1E,   // kVK_ANSI_RightBracket
    LeftBracket = 0x21,    // kVK_ANSI_LeftBracket
    Quote = 0x27,          // kVK_ANSI_Quote
    Semicolon = 0x29,      // kVK_ANSI_Semicolon
    Backslash = 0x2A,      // kVK_ANSI_Backslash
    Comma = 0x2B,          // kVK_ANSI_Comma
    Slash = 0x2C,          // kVK_ANSI_Slash
    Period = 0x2F,         // kVK_ANSI_Period

    // Control keys
    Return = 0x24,         // kVK_Return
    Tab = 0x30,            // kVK_Tab
    Space = 0x31,          // kVK_Space
    Delete = 0x33,         // kVK_Delete (Backspace)
    Escape = 0x35,         // kVK_Escape
    ForwardDelete = 0x75,  // kVK_ForwardDelete
    Home = 0x73,           // kVK_Home
    End = 0x77,            // kVK_End
    PageUp = 0x74,         // kVK_PageUp
    PageDown = 0x79,       // kVK_PageDown

    // Modifier keys (reported as FlagsChanged)
    RightCommand = 0x36,   // kVK_RightCommand
    Command = 0x37,        // kVK_Command
    Shift = 0x38,          // kVK_Shift
    CapsLock = 0x39,       // kVK_CapsLock
    Option = 0x3A,         // kVK_Option
    Control = 0x3B,        // kVK_Control
    RightShift = 0x3C,     // kVK_RightShift
    RightOption = 0x3D,    // kVK_RightOption
    RightControl = 0x3E,   // kVK_RightControl
    Function = 0x3F,       // kVK_Function

    // Function keys
    F1 = 0x7A,             // kVK_F1
    F2 = 0x78,             // kVK_F2
    F3 = 0x63,             // kVK_F3
    F4 = 0x76,             // kVK_F4
    F5 = 0x60,             // kVK_F5
    F6 = 0x61,             // kVK_F6
    F7 = 0x62,             // kVK_F7
    F8 = 0x64,             // kVK_F8
    F9 = 0x65,             // kVK_F9
    F10 = 0x6D,            // kVK_F10
    F11 = 0x67,            // kVK_F11
    F12 = 0x6F,            // kVK_F12

    // Arrows
    LeftArrow = 0x7B,      // kVK_LeftArrow
    RightArrow = 0x7C,     // kVK_RightArrow
    DownArrow = 0x7D,      // kVK_DownArrow
    UpArrow = 0x7E,        // kVK_UpArrow
}

/// Every named key, in declaration order.
pub const ALL_KEYS: &[VirtualKey] = &[
    VirtualKey::KeyA, VirtualKey::KeyS, VirtualKey::KeyD, VirtualKey::KeyF,
    VirtualKey::KeyH, VirtualKey::KeyG, VirtualKey::KeyZ, VirtualKey::KeyX,
    VirtualKey::KeyC, VirtualKey::KeyV, VirtualKey::KeyB, VirtualKey::KeyQ,
    VirtualKey::KeyW, VirtualKey::KeyE, VirtualKey::KeyR, VirtualKey::KeyY,
    VirtualKey::KeyT, VirtualKey::KeyO, VirtualKey::KeyU, VirtualKey::KeyI,
    VirtualKey::KeyP, VirtualKey::KeyL, VirtualKey::KeyJ, VirtualKey::KeyK,
    VirtualKey::KeyN, VirtualKey::KeyM,
    VirtualKey::Key1, VirtualKey::Key2, VirtualKey::Key3, VirtualKey::Key4,
    VirtualKey::Key6, VirtualKey::Key5, VirtualKey::Equal, VirtualKey::Key9,
    VirtualKey::Key7, VirtualKey::Minus, VirtualKey::Key8, VirtualKey::Key0,
    VirtualKey::Grave,
    VirtualKey::RightBracket, VirtualKey::LeftBracket, VirtualKey::Quote,
    VirtualKey::Semicolon, VirtualKey::Backslash, VirtualKey::Comma,
    VirtualKey::Slash, VirtualKey::Period,
    VirtualKey::Return, VirtualKey::Tab, VirtualKey::Space, VirtualKey::Delete,
    VirtualKey::Escape, VirtualKey::ForwardDelete, VirtualKey::Home,
    VirtualKey::End, VirtualKey::PageUp, VirtualKey::PageDown,
    VirtualKey::RightCommand, VirtualKey::Command, VirtualKey::Shift,
    VirtualKey::CapsLock, VirtualKey::Option, VirtualKey::Control,
    VirtualKey::RightShift, VirtualKey::RightOption, VirtualKey::RightControl,
    VirtualKey::Function,
    VirtualKey::F1, VirtualKey::F2, VirtualKey::F3, VirtualKey::F4,
    VirtualKey::F5, VirtualKey::F6, VirtualKey::F7, VirtualKey::F8,
    VirtualKey::F9, VirtualKey::F10, VirtualKey::F11, VirtualKey::F12,
    VirtualKey::LeftArrow, VirtualKey::RightArrow, VirtualKey::DownArrow,
    VirtualKey::UpArrow,
];

impl VirtualKey {
    /// Raw key code for this key
    pub const fn code(self) -> KeyCode {
        self as KeyCode
    }

    /// Look up the named key for a raw code
    pub fn from_code(code: KeyCode) -> Option<Self> {
        ALL_KEYS.iter().copied().find(|key| key.code() == code)
    }

    /// Parse a key name such as `"S"`, `"space"`, `"`"` or `"kVK_ANSI_S"`
    pub fn from_name(name: &str) -> Result<Self> {
        let normalized = name.trim().to_uppercase();
        let normalized = normalized
            .strip_prefix("KVK_ANSI_")
            .or_else(|| normalized.strip_prefix("KVK_"))
            .unwrap_or(normalized.as_str());

        name_map()
            .get(normalized)
            .copied()
            .ok_or_else(|| Error::UnknownKeyName(name.to_string()))
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            VirtualKey::KeyA => "A",
            VirtualKey::KeyB => "B",
            VirtualKey::KeyC => "C",
            VirtualKey::KeyD => "D",
            VirtualKey::KeyE => "E",
            VirtualKey::KeyF => "F",
            VirtualKey::KeyG => "G",
            VirtualKey::KeyH => "H",
            VirtualKey::KeyI => "I",
            VirtualKey::KeyJ => "J",
            VirtualKey::KeyK => "K",
            VirtualKey::KeyL => "L",
            VirtualKey::KeyM => "M",
            VirtualKey::KeyN => "N",
            VirtualKey::KeyO => "O",
            VirtualKey::KeyP => "P",
            VirtualKey::KeyQ => "Q",
            VirtualKey::KeyR => "R",
            VirtualKey::KeyS => "S",
            VirtualKey::KeyT => "T",
            VirtualKey::KeyU => "U",
            VirtualKey::KeyV => "V",
            VirtualKey::KeyW => "W",
            VirtualKey::KeyX => "X",
            VirtualKey::KeyY => "Y",
            VirtualKey::KeyZ => "Z",
            VirtualKey::Key0 => "0",
            VirtualKey::Key1 => "1",
            VirtualKey::Key2 => "2",
            VirtualKey::Key3 => "3",
            VirtualKey::Key4 => "4",
            VirtualKey::Key5 => "5",
            VirtualKey::Key6 => "6",
            VirtualKey::Key7 => "7",
            VirtualKey::Key8 => "8",
            VirtualKey::Key9 => "9",
            VirtualKey::Equal => "=",
            VirtualKey::Minus => "-",
            VirtualKey::Grave => "`",
            VirtualKey::RightBracket => "]",
            VirtualKey::LeftBracket => "[",
            VirtualKey::Quote => "'",
            VirtualKey::Semicolon => ";",
            VirtualKey::Backslash => "\\",
            VirtualKey::Comma => ",",
            VirtualKey::Slash => "/",
            VirtualKey::Period => ".",
            VirtualKey::Return => "Return",
            VirtualKey::Tab => "Tab",
            VirtualKey::Space => "Space",
            VirtualKey::Delete => "Delete",
            VirtualKey::Escape => "Escape",
            VirtualKey::ForwardDelete => "ForwardDelete",
            VirtualKey::Home => "Home",
            VirtualKey::End => "End",
            VirtualKey::PageUp => "PageUp",
            VirtualKey::PageDown => "PageDown",
            VirtualKey::RightCommand => "RightCommand",
            VirtualKey::Command => "Command",
            VirtualKey::Shift => "Shift",
            VirtualKey::CapsLock => "CapsLock",
            VirtualKey::Option => "Option",
            VirtualKey::Control => "Control",
            VirtualKey::RightShift => "RightShift",
            VirtualKey::RightOption => "RightOption",
            VirtualKey::RightControl => "RightControl",
            VirtualKey::Function => "Fn",
            VirtualKey::F1 => "F1",
            VirtualKey::F2 => "F2",
            VirtualKey::F3 => "F3",
            VirtualKey::F4 => "F4",
            VirtualKey::F5 => "F5",
            VirtualKey::F6 => "F6",
            VirtualKey::F7 => "F7",
            VirtualKey::F8 => "F8",
            VirtualKey::F9 => "F9",
            VirtualKey::F10 => "F10",
            VirtualKey::F11 => "F11",
            VirtualKey::F12 => "F12",
            VirtualKey::LeftArrow => "LeftArrow",
            VirtualKey::RightArrow => "RightArrow",
            VirtualKey::DownArrow => "DownArrow",
            VirtualKey::UpArrow => "UpArrow",
        }
    }

    /// Modifier keys toggle flags instead of producing key down/up
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            VirtualKey::Command
                | VirtualKey::RightCommand
                | VirtualKey::Shift
                | VirtualKey::RightShift
                | VirtualKey::CapsLock
                | VirtualKey::Option
                | VirtualKey::RightOption
                | VirtualKey::Control
                | VirtualKey::RightControl
                | VirtualKey::Function
        )
    }
}

impl From<VirtualKey> for KeyCode {
    fn from(key: VirtualKey) -> Self {
        key.code()
    }
}

fn name_map() -> &'static HashMap<String, VirtualKey> {
    static MAP: OnceLock<HashMap<String, VirtualKey>> = OnceLock::new();
    MAP.get_or_init(create_name_map)
}

/// Uppercase names (and aliases) to keys
fn create_name_map() -> HashMap<String, VirtualKey> {
    let mut map = HashMap::new();

    for &key in ALL_KEYS {
        map.insert(key.name().to_uppercase(), key);
    }

    // Spelled-out aliases for punctuation and the kVK_* suffixes
    map.insert("EQUAL".into(), VirtualKey::Equal);
    map.insert("MINUS".into(), VirtualKey::Minus);
    map.insert("GRAVE".into(), VirtualKey::Grave);
    map.insert("BACKTICK".into(), VirtualKey::Grave);
    map.insert("RIGHTBRACKET".into(), VirtualKey::RightBracket);
    map.insert("LEFTBRACKET".into(), VirtualKey::LeftBracket);
    map.insert("QUOTE".into(), VirtualKey::Quote);
    map.insert("SEMICOLON".into(), VirtualKey::Semicolon);
    map.insert("BACKSLASH".into(), VirtualKey::Backslash);
    map.insert("COMMA".into(), VirtualKey::Comma);
    map.insert("SLASH".into(), VirtualKey::Slash);
    map.insert("PERIOD".into(), VirtualKey::Period);
    map.insert("ENTER".into(), VirtualKey::Return);
    map.insert("BACKSPACE".into(), VirtualKey::Delete);
    map.insert("ESC".into(), VirtualKey::Escape);
    map.insert("CMD".into(), VirtualKey::Command);
    map.insert("ALT".into(), VirtualKey::Option);
    map.insert("CTRL".into(), VirtualKey::Control);
    map.insert("FUNCTION".into(), VirtualKey::Function);

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_lookup() {
        for &key in ALL_KEYS {
            assert_eq!(VirtualKey::from_code(key.code()), Some(key));
        }
        assert_eq!(VirtualKey::from_code(0x0A), None);
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(VirtualKey::from_name("s").unwrap(), VirtualKey::KeyS);
        assert_eq!(VirtualKey::from_name("Space").unwrap(), VirtualKey::Space);
        assert_eq!(VirtualKey::from_name("`").unwrap(), VirtualKey::Grave);
        assert_eq!(VirtualKey::from_name("kVK_ANSI_Grave").unwrap(), VirtualKey::Grave);
        assert_eq!(VirtualKey::from_name("kVK_Tab").unwrap(), VirtualKey::Tab);
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert!(matches!(
            VirtualKey::from_name("hyper"),
            Err(Error::UnknownKeyName(name)) if name == "hyper"
        ));
    }

    #[test]
    fn modifiers_are_flagged() {
        assert!(VirtualKey::Command.is_modifier());
        assert!(VirtualKey::Function.is_modifier());
        assert!(!VirtualKey::Space.is_modifier());
    }
}
