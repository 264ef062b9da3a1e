use crate::model::{Strategy, Tick};

use super::digit::{last_digit, MAX_PIP_SIZE};
use super::histogram::DigitHistogram;
use super::prediction::{predict, Prediction};
use super::stats::DigitStats;
use super::window::TickWindow;

/// Rolling digit state for one tracked symbol.
///
/// Owns the window plus the current symbol and strategy selection; every
/// mutation goes through a method here. All operations are synchronous and
/// touch no I/O, so feeding and rendering stay with the caller.
#[derive(Debug)]
pub struct DigitEngine {
    window: TickWindow,
    symbol: String,
    strategy: Strategy,
    default_pip_size: u32,
}

impl DigitEngine {
    pub fn new(symbol: &str, strategy: Strategy, max_ticks: usize, default_pip_size: u32) -> Self {
        Self {
            window: TickWindow::new(max_ticks),
            symbol: symbol.to_string(),
            strategy,
            default_pip_size,
        }
    }

    /// Extract the digit from a raw feed quote, push the resulting tick, and
    /// hand it back for display.
    pub fn ingest(&mut self, quote: f64, epoch: u64, pip_size: Option<u32>) -> Tick {
        // Untrusted wire value; uncapped it would size the format buffer.
        let pip_size = pip_size.unwrap_or(self.default_pip_size).min(MAX_PIP_SIZE);
        let tick = Tick::new(quote, last_digit(quote, pip_size), epoch);
        self.window.push(tick);
        tick
    }

    /// Push an already-built tick.
    pub fn push(&mut self, tick: Tick) {
        self.window.push(tick);
    }

    /// Switch the tracked symbol. The window is cleared in the same call, so
    /// no later read can mix instruments. Re-selecting the current symbol is
    /// a no-op that keeps history; the return value says whether a switch
    /// happened.
    pub fn set_symbol(&mut self, symbol: &str) -> bool {
        if self.symbol == symbol {
            return false;
        }
        self.symbol = symbol.to_string();
        self.window.clear();
        true
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn window(&self) -> &TickWindow {
        &self.window
    }

    pub fn last_tick(&self) -> Option<&Tick> {
        self.window.last()
    }

    /// Breakdown of the window under the selected strategy.
    pub fn stats(&self) -> DigitStats {
        DigitStats::compute(&self.window, self.strategy)
    }

    pub fn histogram(&self) -> DigitHistogram {
        DigitHistogram::compute(&self.window)
    }

    /// Heuristic call over the window as it stands right now.
    pub fn predict(&self) -> Option<Prediction> {
        predict(&self.window, self.strategy)
    }
}
