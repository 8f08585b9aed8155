pub mod chat;
pub mod window;

pub use chat::*;
pub use window::*;
