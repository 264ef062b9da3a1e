use std::fmt;

use serde::Serialize;

/// One subscribable synthetic index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarketAsset {
    pub name: &'static str,
    pub symbol: &'static str,
}

/// Upstream market grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketCategory {
    Volatility,
    BoomCrash,
    Step,
    Jump,
}

const VOLATILITY: &[MarketAsset] = &[
    MarketAsset { name: "Volatility 10 (1s)", symbol: "1HZ10V" },
    MarketAsset { name: "Volatility 100 (1s)", symbol: "1HZ100V" },
    MarketAsset { name: "Volatility 10", symbol: "R_10" },
    MarketAsset { name: "Volatility 25", symbol: "R_25" },
    MarketAsset { name: "Volatility 50", symbol: "R_50" },
    MarketAsset { name: "Volatility 75", symbol: "R_75" },
    MarketAsset { name: "Volatility 100", symbol: "R_100" },
];

const BOOM_CRASH: &[MarketAsset] = &[
    MarketAsset { name: "Boom 300", symbol: "BOOM300" },
    MarketAsset { name: "Boom 500", symbol: "BOOM500" },
    MarketAsset { name: "Boom 1000", symbol: "BOOM1000" },
    MarketAsset { name: "Crash 300", symbol: "CRASH300" },
    MarketAsset { name: "Crash 500", symbol: "CRASH500" },
    MarketAsset { name: "Crash 1000", symbol: "CRASH1000" },
];

const STEP: &[MarketAsset] = &[MarketAsset { name: "Step Index", symbol: "STEP" }];

const JUMP: &[MarketAsset] = &[
    MarketAsset { name: "Jump 10", symbol: "JUMP_10" },
    MarketAsset { name: "Jump 25", symbol: "JUMP_25" },
    MarketAsset { name: "Jump 50", symbol: "JUMP_50" },
    MarketAsset { name: "Jump 75", symbol: "JUMP_75" },
    MarketAsset { name: "Jump 100", symbol: "JUMP_100" },
];

impl MarketCategory {
    pub const ALL: [MarketCategory; 4] = [
        MarketCategory::Volatility,
        MarketCategory::BoomCrash,
        MarketCategory::Step,
        MarketCategory::Jump,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MarketCategory::Volatility => "Volatility",
            MarketCategory::BoomCrash => "Boom/Crash",
            MarketCategory::Step => "Step",
            MarketCategory::Jump => "Jump",
        }
    }

    pub fn assets(&self) -> &'static [MarketAsset] {
        match self {
            MarketCategory::Volatility => VOLATILITY,
            MarketCategory::BoomCrash => BOOM_CRASH,
            MarketCategory::Step => STEP,
            MarketCategory::Jump => JUMP,
        }
    }
}

impl fmt::Display for MarketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every catalog asset, category order then listing order.
pub fn all_assets() -> impl Iterator<Item = &'static MarketAsset> {
    MarketCategory::ALL.iter().flat_map(|category| category.assets().iter())
}

/// Case-insensitive symbol lookup.
pub fn find_symbol(symbol: &str) -> Option<&'static MarketAsset> {
    let needle = symbol.trim().to_ascii_uppercase();
    all_assets().find(|asset| asset.symbol == needle)
}

/// Symbol tracked when the config names none.
pub fn default_symbol() -> &'static str {
    VOLATILITY[0].symbol
}
