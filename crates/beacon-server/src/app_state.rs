//! Shared application state for the beacon server.
//!
//! Holds the config, the metrics registry, and the chat broadcast channel.
//! The registry is constructed here and handed to the HTTP layer by
//! reference, so tests can build independent states with independent
//! registries.

use std::sync::Arc;

use tokio::sync::broadcast;

use beacon_core::RequestMetrics;

use crate::config::ServerConfig;

const CHAT_CHANNEL_CAPACITY: usize = 256;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    metrics: RequestMetrics,
    chat: broadcast::Sender<String>,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        let (chat, _) = broadcast::channel(CHAT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics: RequestMetrics::new(),
                chat,
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &RequestMetrics {
        &self.inner.metrics
    }

    /// Chat bus: every WS session subscribes; text frames are published here.
    pub fn chat(&self) -> &broadcast::Sender<String> {
        &self.inner.chat
    }
}
