pub mod digit;
pub mod engine;
pub mod histogram;
pub mod prediction;
pub mod stats;
pub mod window;

pub use digit::{last_digit, DEFAULT_PIP_SIZE, MAX_PIP_SIZE};
pub use engine::DigitEngine;
pub use histogram::{DigitHeat, DigitHistogram};
pub use prediction::{predict, Prediction, PredictionCall, CONFIDENCE_MAX, CONFIDENCE_MIN};
pub use stats::DigitStats;
pub use window::TickWindow;
