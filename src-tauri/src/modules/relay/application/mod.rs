// Relay Application Layer

pub mod relay;

pub use relay::*;
