use serde::{Deserialize, Serialize};

/// Subscription request for one symbol's tick stream.
///
/// Wire form: `{"ticks":"R_50","subscribe":1}`.
#[derive(Debug, Clone, Serialize)]
pub struct TicksSubscribeRequest {
    pub ticks: String,
    pub subscribe: u8,
}

impl TicksSubscribeRequest {
    pub fn new(symbol: &str) -> Self {
        Self {
            ticks: symbol.to_string(),
            subscribe: 1,
        }
    }
}

/// Envelope for every server message we care about: a tick payload, an error
/// payload, or neither (ignored).
#[derive(Debug, Deserialize)]
pub struct DerivMessage {
    #[serde(default)]
    pub msg_type: Option<String>,
    #[serde(default)]
    pub tick: Option<TickPayload>,
    #[serde(default)]
    pub error: Option<ErrorPayload>,
}

/// One streamed tick for the subscribed symbol.
#[derive(Debug, Clone, Deserialize)]
pub struct TickPayload {
    pub symbol: String,
    pub quote: f64,
    /// Seconds since the Unix epoch.
    pub epoch: u64,
    /// Fractional digits the symbol quotes at; absent on some payloads.
    #[serde(default)]
    pub pip_size: Option<u32>,
    /// Server-assigned subscription id.
    #[serde(default)]
    pub id: Option<String>,
}

/// Out-of-band failure such as InvalidSymbol or MarketIsClosed.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
}
