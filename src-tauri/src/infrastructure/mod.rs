pub mod event_bus;
pub mod lifecycle;
pub mod shell;
pub mod state;

pub use event_bus::*;
pub use lifecycle::*;
pub use shell::*;
pub use state::*;
