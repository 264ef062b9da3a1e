use serde::Serialize;

use super::window::TickWindow;

/// Relative temperature of one digit cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitHeat {
    /// Count ties the window maximum; every tied digit is hot.
    Hot,
    /// Digit never appeared in the window.
    Cold,
    Neutral,
}

/// Frequency of each final digit 0-9 over the current window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DigitHistogram {
    counts: [u32; 10],
    total: u32,
}

impl DigitHistogram {
    pub fn compute(window: &TickWindow) -> Self {
        let mut counts = [0u32; 10];
        for digit in window.digits() {
            counts[usize::from(digit)] += 1;
        }
        Self {
            counts,
            total: window.len() as u32,
        }
    }

    pub fn count(&self, digit: u8) -> u32 {
        self.counts[usize::from(digit)]
    }

    pub fn counts(&self) -> [u32; 10] {
        self.counts
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn min_count(&self) -> u32 {
        self.counts.iter().copied().min().unwrap_or(0)
    }

    /// Least frequent digit; the lowest digit wins ties. `None` on an empty
    /// window.
    pub fn rarest_digit(&self) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        let min = self.min_count();
        self.counts.iter().position(|&count| count == min).map(|i| i as u8)
    }

    /// Share of the window held by `digit`, rounded to a whole percent.
    /// Cells can therefore sum to slightly more or less than 100.
    pub fn percent(&self, digit: u8) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (100.0 * f64::from(self.count(digit)) / f64::from(self.total)).round() as u32
    }

    pub fn heat(&self, digit: u8) -> DigitHeat {
        if self.total == 0 {
            // Nothing is hot with no data.
            return DigitHeat::Cold;
        }
        let count = self.count(digit);
        if count == self.max_count() {
            DigitHeat::Hot
        } else if count == 0 {
            DigitHeat::Cold
        } else {
            DigitHeat::Neutral
        }
    }

    pub fn hot_digits(&self) -> Vec<u8> {
        (0u8..10).filter(|&d| self.heat(d) == DigitHeat::Hot).collect()
    }

    pub fn cold_digits(&self) -> Vec<u8> {
        (0u8..10).filter(|&d| self.heat(d) == DigitHeat::Cold).collect()
    }
}
