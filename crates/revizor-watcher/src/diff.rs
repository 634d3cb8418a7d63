//! Diff engine — decides which homework items deserve a notification.
//!
//! Keeps the last-observed status per homework id. A record produces a
//! message when its current status differs from the recorded one (a
//! never-seen item always counts as changed). The table entry is refreshed
//! on every record, message or not, so a status that flips back and forth is
//! always compared against the true last-seen value.

use std::collections::HashMap;

use revizor_core::error::Result;
use revizor_core::types::{HomeworkRecord, HomeworkStatus};

/// Last-observed status per homework id. Absent key means never observed.
pub type StatusTable = HashMap<i64, HomeworkStatus>;

#[derive(Debug, Default)]
pub struct DiffEngine {
    table: StatusTable,
}

impl DiffEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diff a batch of records against the table, in input order.
    ///
    /// Returns one message per changed item, preserving input order. An
    /// unknown status aborts the batch; the offending id is left untouched.
    pub fn evaluate(&mut self, records: &[HomeworkRecord]) -> Result<Vec<String>> {
        let mut messages = Vec::new();

        for record in records {
            let status = HomeworkStatus::parse(&record.status)?;
            let prior = self.table.get(&record.id).copied();

            if prior != Some(status) {
                messages.push(render_message(&record.name, status));
            }
            self.table.insert(record.id, status);
        }

        Ok(messages)
    }

    pub fn table(&self) -> &StatusTable {
        &self.table
    }
}

/// Fixed notification template.
pub fn render_message(name: &str, status: HomeworkStatus) -> String {
    format!("Status changed for \"{name}\": {}", status.verdict())
}
