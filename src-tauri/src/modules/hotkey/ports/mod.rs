// Hotkey Ports Layer

pub mod hotkey_port;

pub use hotkey_port::*;
