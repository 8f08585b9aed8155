// Relay Domain Layer

pub mod channels;
pub mod value_objects;

pub use channels::*;
pub use value_objects::*;
