use serde::Serialize;

/// One price observation with its extracted final digit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tick {
    pub quote: f64,
    /// Last decimal digit of the quote at the symbol's pip precision, 0-9.
    pub digit: u8,
    /// Seconds since the Unix epoch, as reported by the feed.
    pub epoch: u64,
}

impl Tick {
    pub fn new(quote: f64, digit: u8, epoch: u64) -> Self {
        debug_assert!(digit <= 9, "digit out of range: {digit}");
        Self { quote, digit, epoch }
    }
}
