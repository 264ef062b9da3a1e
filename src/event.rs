#[derive(Debug, Clone)]
pub enum WsConnectionStatus {
    Connected,
    Disconnected,
    Reconnecting { attempt: u32, delay_ms: u64 },
}

/// Raw tick as delivered by the feed, before digit extraction.
///
/// Carries the subscription generation it was received under so the consumer
/// can drop stragglers from an abandoned symbol.
#[derive(Debug, Clone)]
pub struct FeedTick {
    pub generation: u64,
    pub symbol: String,
    pub quote: f64,
    pub epoch: u64,
    pub pip_size: Option<u32>,
}

/// Symbol subscription requested of the feed task. Bumping the generation
/// invalidates every tick tagged with an older one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSubscription {
    pub generation: u64,
    pub symbol: String,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    FeedTick(FeedTick),
    WsStatus(WsConnectionStatus),
    /// Out-of-band error payload from the feed, e.g. MarketIsClosed.
    FeedError { code: String, message: String },
    LogMessage(String),
}
