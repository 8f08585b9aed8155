// Tray Infrastructure Layer

pub mod memory_handler;
pub mod tauri_handler;

pub use memory_handler::*;
pub use tauri_handler::*;
