pub mod strategy;
pub mod tick;

pub use strategy::Strategy;
pub use tick::Tick;
