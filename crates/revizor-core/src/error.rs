//! Error taxonomy for the whole workspace.
//!
//! Every tick-level failure funnels into one of these variants; the loop
//! controller translates them into a single chat report and keeps running.
//! Only `Config` is fatal, and only before the loop starts.

use thiserror::Error;

/// Result alias used across all Revizor crates.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Network or HTTP failure reaching the review API.
    #[error("review API unreachable: {0}")]
    Transport(String),

    /// The review API answered, but the payload is not the expected shape.
    #[error("malformed review API response: {0}")]
    MalformedResponse(String),

    /// A homework record carries a status outside the known set.
    #[error("unknown homework status: {0}")]
    UnknownStatus(String),

    /// The outbound chat notification could not be delivered.
    #[error("notification send failed: {0}")]
    NotificationSend(String),

    /// Startup configuration or credential problem.
    #[error("configuration error: {0}")]
    Config(String),
}
