//! Watcher — the loop controller that owns all mutable state.
//!
//! One tick is FETCH → DIFF → NOTIFY. Any error inside a tick is caught at
//! the tick boundary, reported to the same chat best-effort, and the loop
//! sleeps the same fixed interval. No backoff, no jitter: a failed fetch
//! leaves the cursor alone, so the next tick retries the same window.

use std::time::Duration;

use revizor_core::error::Result;
use revizor_core::traits::{Notifier, ReviewSource};

use crate::diff::DiffEngine;
use crate::poller::Poller;

/// The poll-diff-notify loop. Owns the cursor and the status table.
pub struct Watcher<S, N> {
    poller: Poller<S>,
    notifier: N,
    engine: DiffEngine,
    cursor: i64,
    interval: Duration,
}

impl<S: ReviewSource, N: Notifier> Watcher<S, N> {
    /// Start watching from the current moment.
    pub fn new(source: S, notifier: N, interval_secs: u64) -> Self {
        Self::with_cursor(source, notifier, interval_secs, chrono::Utc::now().timestamp())
    }

    /// Start watching from an explicit cursor (epoch seconds).
    pub fn with_cursor(source: S, notifier: N, interval_secs: u64, cursor: i64) -> Self {
        Self {
            poller: Poller::new(source),
            notifier,
            engine: DiffEngine::new(),
            cursor,
            interval: Duration::from_secs(interval_secs),
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Run forever. Only process termination stops the loop.
    pub async fn run(mut self) {
        tracing::info!(
            "⏰ watcher started via {} (poll every {}s)",
            self.notifier.name(),
            self.interval.as_secs()
        );
        loop {
            self.run_tick().await;
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Execute one tick, translating any failure into a chat report.
    pub async fn run_tick(&mut self) {
        match self.tick_inner().await {
            Ok(0) => tracing::info!("no homework updates"),
            Ok(sent) => tracing::info!("📣 delivered {sent} status notification(s)"),
            Err(e) => {
                tracing::warn!("tick failed: {e}");
                let report = format!("Status check failed: {e}");
                // Best-effort: an undeliverable failure report is dropped.
                if let Err(send_err) = self.notifier.send(&report).await {
                    tracing::warn!("failure report not delivered: {send_err}");
                }
            }
        }
    }

    async fn tick_inner(&mut self) -> Result<usize> {
        let (records, server_ts) = self.poller.tick(self.cursor).await?;
        // The fetch succeeded; commit the window before diffing. The cursor
        // never regresses even if the server timestamp does.
        if server_ts > self.cursor {
            self.cursor = server_ts;
        }
        tracing::debug!(count = records.len(), "fetched homework records");

        let messages = self.engine.evaluate(&records)?;
        let sent = messages.len();
        for text in &messages {
            self.notifier.send(text).await?;
        }
        Ok(sent)
    }
}
