use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::analysis::{DEFAULT_PIP_SIZE, MAX_PIP_SIZE};
use crate::market_catalog;
use crate::model::Strategy;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub deriv: DerivConfig,
    pub analysis: AnalysisConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DerivConfig {
    pub ws_url: String,
    /// The public unregistered app id; no key or token is ever sent.
    pub app_id: u32,
    pub symbol: String,
}

impl Default for DerivConfig {
    fn default() -> Self {
        Self {
            ws_url: "wss://ws.binaryws.com/websockets/v3".to_string(),
            app_id: 1089,
            symbol: market_catalog::default_symbol().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub max_ticks: usize,
    pub default_pip_size: u32,
    pub strategy: Strategy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_ticks: 100,
            default_pip_size: DEFAULT_PIP_SIZE,
            strategy: Strategy::EvenOdd,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    pub const DEFAULT_PATH: &'static str = "config/default.toml";

    /// Load config/default.toml when present, otherwise the built-in
    /// defaults, then apply `DERIV_APP_ID` from the environment or `.env`.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::load_from(Path::new(Self::DEFAULT_PATH))?;

        if let Ok(app_id) = std::env::var("DERIV_APP_ID") {
            config.deriv.app_id = app_id
                .trim()
                .parse()
                .context("DERIV_APP_ID must be a positive integer")?;
        }

        Ok(config)
    }

    /// Load and validate one TOML file. A missing file is not an error; the
    /// feed works unauthenticated with the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Config = if path.exists() {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            toml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))?
        } else {
            Config::default()
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.deriv.ws_url.trim().is_empty() {
            bail!("deriv.ws_url must not be empty");
        }
        if self.deriv.symbol.trim().is_empty() {
            bail!("deriv.symbol must not be empty");
        }
        if self.analysis.max_ticks == 0 {
            bail!("analysis.max_ticks must be at least 1");
        }
        if self.analysis.default_pip_size > MAX_PIP_SIZE {
            bail!(
                "analysis.default_pip_size {} is out of range (max {})",
                self.analysis.default_pip_size,
                MAX_PIP_SIZE
            );
        }
        Ok(())
    }
}
