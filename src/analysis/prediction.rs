use std::fmt;

use serde::Serialize;

use crate::model::Strategy;

use super::histogram::DigitHistogram;
use super::window::TickWindow;

/// Floor and ceiling applied to every strategy's confidence score.
pub const CONFIDENCE_MIN: f64 = 10.0;
pub const CONFIDENCE_MAX: f64 = 95.0;

/// Flat score for the even/odd dead zone where neither side is skewed.
const HOLD_CONFIDENCE: f64 = 30.0;
/// Flat score for over/under; that heuristic carries no magnitude signal.
const OVER_UNDER_CONFIDENCE: f64 = 65.0;

/// Directional call produced by a strategy's heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "call", content = "digit", rename_all = "snake_case")]
pub enum PredictionCall {
    Even,
    Odd,
    Hold,
    Match(u8),
    Over,
    Under,
}

impl PredictionCall {
    /// Terminal label, e.g. `ODD` or `MATCH 3`.
    pub fn label(&self) -> String {
        match self {
            PredictionCall::Even => "EVEN".to_string(),
            PredictionCall::Odd => "ODD".to_string(),
            PredictionCall::Hold => "HOLD".to_string(),
            PredictionCall::Match(digit) => format!("MATCH {digit}"),
            PredictionCall::Over => "OVER".to_string(),
            PredictionCall::Under => "UNDER".to_string(),
        }
    }
}

impl fmt::Display for PredictionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// One heuristic call with its clamped confidence.
///
/// Confidence is a bounded mean-reversion score in
/// `[CONFIDENCE_MIN, CONFIDENCE_MAX]`, not a calibrated probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub call: PredictionCall,
    pub confidence: f64,
}

/// Run the active strategy's heuristic over the window.
///
/// Deterministic in `(window, strategy)`; consults no clock, randomness, or
/// I/O. `None` is the empty-window sentinel.
pub fn predict(window: &TickWindow, strategy: Strategy) -> Option<Prediction> {
    if window.is_empty() {
        return None;
    }
    let n = window.len() as f64;
    let (call, confidence) = match strategy {
        Strategy::EvenOdd => {
            let evens = window.digits().filter(|d| d % 2 == 0).count() as f64;
            // Bet against a skewed sample: the score is a 50-point base plus
            // the raw count gap from an even split.
            if evens > n * 0.55 {
                (PredictionCall::Odd, 50.0 + (evens - n * 0.5))
            } else if evens < n * 0.45 {
                (PredictionCall::Even, 50.0 + (n * 0.5 - evens))
            } else {
                (PredictionCall::Hold, HOLD_CONFIDENCE)
            }
        }
        Strategy::MatchesDiffers => {
            // Bet the rarest digit is due. An absent digit scores 100 before
            // the clamp pulls it down.
            let histogram = DigitHistogram::compute(window);
            let rarest = histogram.rarest_digit()?;
            let min_share = f64::from(histogram.min_count()) / n;
            (PredictionCall::Match(rarest), 100.0 - min_share * 100.0)
        }
        Strategy::OverUnder => {
            let over = window.digits().filter(|&d| d > 4).count() as f64;
            if over > n * 0.6 {
                (PredictionCall::Under, OVER_UNDER_CONFIDENCE)
            } else {
                (PredictionCall::Over, OVER_UNDER_CONFIDENCE)
            }
        }
    };
    Some(Prediction {
        call,
        confidence: confidence.clamp(CONFIDENCE_MIN, CONFIDENCE_MAX),
    })
}
