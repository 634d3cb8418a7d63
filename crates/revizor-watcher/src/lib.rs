//! # Revizor Watcher
//!
//! The poll-diff-notify loop. One tick is: fetch updates since the cursor,
//! diff each homework item against the last status we saw for it, send a
//! chat message per change, sleep, repeat. Failures are reported to the same
//! chat and never stop the loop.
//!
//! ```text
//! Watcher (tokio sleep between ticks)
//!   ├── Poller: fetch_updates(cursor) → validate shape → records + new cursor
//!   ├── DiffEngine: record.status vs StatusTable[id] → messages, table update
//!   └── Notifier: one sendMessage per changed item
//! ```

pub mod diff;
pub mod poller;
pub mod runner;

pub use diff::{DiffEngine, StatusTable};
pub use poller::Poller;
pub use runner::Watcher;
