use std::fmt;

use serde::{Deserialize, Serialize};

/// Statistical lens applied to the digit window.
///
/// The selection drives both the stats breakdown and the prediction
/// heuristic; switching strategies never touches the window itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    EvenOdd,
    MatchesDiffers,
    OverUnder,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::EvenOdd,
        Strategy::MatchesDiffers,
        Strategy::OverUnder,
    ];

    /// Stable id used in config files and operator commands.
    pub fn id(&self) -> &'static str {
        match self {
            Strategy::EvenOdd => "even_odd",
            Strategy::MatchesDiffers => "matches_differs",
            Strategy::OverUnder => "over_under",
        }
    }

    /// Parse an operator-supplied id. Accepts the canonical snake_case id
    /// plus a couple of keyboard-friendly spellings.
    pub fn parse(input: &str) -> Option<Strategy> {
        match input.trim().to_ascii_lowercase().as_str() {
            "even_odd" | "even-odd" | "eo" => Some(Strategy::EvenOdd),
            "matches_differs" | "matches-differs" | "md" => Some(Strategy::MatchesDiffers),
            "over_under" | "over-under" | "ou" => Some(Strategy::OverUnder),
            _ => None,
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::EvenOdd
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strategy::EvenOdd => "Even/Odd",
            Strategy::MatchesDiffers => "Matches/Differs",
            Strategy::OverUnder => "Over/Under",
        };
        f.write_str(label)
    }
}
