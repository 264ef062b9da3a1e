use serde::Serialize;

use crate::model::Strategy;

use super::window::TickWindow;

/// Percentage breakdown of the window under one strategy.
///
/// Each pair is complementary by construction: the second member is 100
/// minus the display-rounded first member, so the pair always sums to 100
/// within one rounding step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DigitStats {
    /// No ticks observed yet. The normal zero-data boundary, not an error.
    Empty,
    EvenOdd {
        even_pct: f64,
        odd_pct: f64,
    },
    MatchesDiffers {
        /// Digit of the newest tick; moves with every arrival.
        target: u8,
        match_pct: f64,
        differ_pct: f64,
    },
    OverUnder {
        /// Share of digits 5-9.
        over_pct: f64,
        /// Share of digits 0-4.
        under_pct: f64,
    },
}

impl DigitStats {
    pub fn compute(window: &TickWindow, strategy: Strategy) -> Self {
        if window.is_empty() {
            return DigitStats::Empty;
        }
        let n = window.len() as f64;
        match strategy {
            Strategy::EvenOdd => {
                let evens = window.digits().filter(|d| d % 2 == 0).count() as f64;
                let even_pct = round1(100.0 * evens / n);
                DigitStats::EvenOdd {
                    even_pct,
                    odd_pct: round1(100.0 - even_pct),
                }
            }
            Strategy::MatchesDiffers => {
                let Some(target) = window.last_digit() else {
                    return DigitStats::Empty;
                };
                let matches = window.digits().filter(|&d| d == target).count() as f64;
                let match_pct = round1(100.0 * matches / n);
                DigitStats::MatchesDiffers {
                    target,
                    match_pct,
                    differ_pct: round1(100.0 - match_pct),
                }
            }
            Strategy::OverUnder => {
                let over = window.digits().filter(|&d| d > 4).count() as f64;
                let over_pct = round1(100.0 * over / n);
                DigitStats::OverUnder {
                    over_pct,
                    under_pct: round1(100.0 - over_pct),
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DigitStats::Empty)
    }
}

/// Display rounding for stat percentages: one decimal place.
fn round1(pct: f64) -> f64 {
    (pct * 10.0).round() / 10.0
}
