// Hotkey Application Layer

pub mod binding;

pub use binding::*;
