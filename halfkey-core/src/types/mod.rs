pub mod modifiers;
pub mod virtual_keys;

pub use modifiers::*;
pub use virtual_keys::*;
