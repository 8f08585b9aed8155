// Hotkey Domain Layer
//
// 全局快捷键领域层

pub mod value_objects;

pub use value_objects::*;
