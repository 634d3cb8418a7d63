//! Trait seams between the watcher loop and its collaborators.
//!
//! The loop is generic over these so tests can substitute scripted fakes
//! for the real HTTP client and Telegram channel.

use async_trait::async_trait;

use crate::error::Result;

/// Upstream source of homework review updates.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Fetch everything that changed since `since` (epoch seconds).
    ///
    /// Returns the raw response JSON; shape validation is the poller's job.
    /// Network and HTTP failures surface as [`crate::Error::Transport`].
    async fn fetch_updates(&self, since: i64) -> Result<serde_json::Value>;
}

/// Outbound chat channel the watcher reports through.
#[async_trait]
pub trait Notifier: Send + Sync {
    fn name(&self) -> &str;

    /// Deliver one plain-text message to the configured chat.
    async fn send(&self, text: &str) -> Result<()>;
}
