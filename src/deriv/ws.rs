use anyhow::{Context, Result};
use futures_util::{SinkExt, StreamExt};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio_tungstenite::tungstenite;
use url::Url;

use super::types::{DerivMessage, TicksSubscribeRequest};
use crate::error::AppError;
use crate::event::{AppEvent, FeedSubscription, FeedTick, WsConnectionStatus};

/// Exponential backoff for reconnection.
struct ExponentialBackoff {
    current: Duration,
    initial: Duration,
    max: Duration,
    factor: f64,
}

impl ExponentialBackoff {
    fn new(initial: Duration, max: Duration, factor: f64) -> Self {
        Self {
            current: initial,
            initial,
            max,
            factor,
        }
    }

    fn next_delay(&mut self) -> Duration {
        let delay = self.current;
        self.current = Duration::from_secs_f64(
            (self.current.as_secs_f64() * self.factor).min(self.max.as_secs_f64()),
        );
        delay
    }

    fn reset(&mut self) {
        self.current = self.initial;
    }
}

/// Why a session returned without a transport failure.
enum SessionEnd {
    Shutdown,
    /// The subscription changed; the socket was dropped on purpose and a
    /// fresh connect should pick up the new symbol immediately.
    Resubscribe,
}

pub struct DerivWsClient {
    url: Url,
}

impl DerivWsClient {
    /// Build the endpoint URL with the `app_id` query parameter attached.
    pub fn new(ws_base_url: &str, app_id: u32) -> Result<Self, AppError> {
        let url = Url::parse_with_params(ws_base_url, &[("app_id", app_id.to_string())])?;
        Ok(Self { url })
    }

    /// Connect and run the feed loop with automatic reconnection.
    ///
    /// Ticks, status changes, and feed errors go out through `event_tx`.
    /// `subscription` carries the symbol to stream; a change drops the
    /// socket and resubscribes without backoff. `shutdown` ends the loop.
    pub async fn connect_and_run(
        &self,
        event_tx: mpsc::Sender<AppEvent>,
        mut subscription: watch::Receiver<FeedSubscription>,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<()> {
        let mut backoff = ExponentialBackoff::new(
            Duration::from_secs(1),
            Duration::from_secs(60),
            2.0,
        );
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            match self
                .connect_once(&event_tx, &mut backoff, &mut subscription, &mut shutdown)
                .await
            {
                Ok(SessionEnd::Shutdown) => {
                    let _ = event_tx
                        .send(AppEvent::WsStatus(WsConnectionStatus::Disconnected))
                        .await;
                    break;
                }
                Ok(SessionEnd::Resubscribe) => continue,
                Err(e) => {
                    let _ = event_tx
                        .send(AppEvent::WsStatus(WsConnectionStatus::Disconnected))
                        .await;
                    let _ = event_tx
                        .send(AppEvent::LogMessage(format!("Feed error: {}", e)))
                        .await;

                    let delay = backoff.next_delay();
                    let _ = event_tx
                        .send(AppEvent::WsStatus(WsConnectionStatus::Reconnecting {
                            attempt,
                            delay_ms: delay.as_millis() as u64,
                        }))
                        .await;

                    tokio::select! {
                        _ = tokio::time::sleep(delay) => continue,
                        _ = shutdown.changed() => {
                            let _ = event_tx
                                .send(AppEvent::LogMessage("Shutdown during reconnect".to_string()))
                                .await;
                            break;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    async fn connect_once(
        &self,
        event_tx: &mpsc::Sender<AppEvent>,
        backoff: &mut ExponentialBackoff,
        subscription: &mut watch::Receiver<FeedSubscription>,
        shutdown: &mut watch::Receiver<bool>,
    ) -> Result<SessionEnd> {
        // Latest subscription wins, including changes made while backing off.
        let current = subscription.borrow_and_update().clone();

        let _ = event_tx
            .send(AppEvent::LogMessage(format!("Connecting to {}", self.url)))
            .await;

        let (ws_stream, _resp) = tokio_tungstenite::connect_async(self.url.as_str())
            .await
            .context("WebSocket connect failed")?;

        // Send Connected AFTER successful connection
        let _ = event_tx
            .send(AppEvent::WsStatus(WsConnectionStatus::Connected))
            .await;
        backoff.reset();

        let (mut write, mut read) = ws_stream.split();

        let request = TicksSubscribeRequest::new(&current.symbol);
        let payload = serde_json::to_string(&request).map_err(AppError::from)?;
        write
            .send(tungstenite::Message::Text(payload))
            .await
            .context("failed to send subscribe request")?;

        let _ = event_tx
            .send(AppEvent::LogMessage(format!(
                "Subscribed to ticks for {}",
                current.symbol
            )))
            .await;

        loop {
            tokio::select! {
                msg = read.next() => {
                    match msg {
                        Some(Ok(tungstenite::Message::Text(text))) => {
                            forward_message(&text, &current, event_tx).await;
                        }
                        Some(Ok(tungstenite::Message::Ping(_))) => {
                            // tokio-tungstenite handles pong automatically
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            return Err(AppError::WebSocket(format!("read error: {}", e)).into());
                        }
                        None => {
                            return Err(AppError::WebSocket("stream ended".to_string()).into());
                        }
                    }
                }
                _ = subscription.changed() => {
                    return Ok(SessionEnd::Resubscribe);
                }
                _ = shutdown.changed() => {
                    return Ok(SessionEnd::Shutdown);
                }
            }
        }
    }
}

/// Parse one text frame and forward whatever it holds.
///
/// Ticks keep strict arrival order: the send awaits channel capacity rather
/// than dropping, so a slow consumer backpressures the socket instead of
/// losing digits.
async fn forward_message(
    text: &str,
    current: &FeedSubscription,
    event_tx: &mpsc::Sender<AppEvent>,
) {
    match serde_json::from_str::<DerivMessage>(text) {
        Ok(message) => {
            if let Some(error) = message.error {
                let feed_error = AppError::Feed {
                    code: error.code.clone(),
                    message: error.message.clone(),
                };
                tracing::warn!(error = %feed_error, "Feed rejected the subscription");
                let _ = event_tx
                    .send(AppEvent::FeedError {
                        code: error.code,
                        message: error.message,
                    })
                    .await;
            } else if let Some(tick) = message.tick {
                let _ = event_tx
                    .send(AppEvent::FeedTick(FeedTick {
                        generation: current.generation,
                        symbol: tick.symbol,
                        quote: tick.quote,
                        epoch: tick.epoch,
                        pip_size: tick.pip_size,
                    }))
                    .await;
            }
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to parse feed message");
        }
    }
}
