// Window Infrastructure Layer

pub mod memory_adapter;
pub mod tauri_adapter;

pub use memory_adapter::*;
pub use tauri_adapter::*;
