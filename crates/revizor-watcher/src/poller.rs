//! Poller — fetches one window of updates and validates the response shape.

use revizor_core::error::{Error, Result};
use revizor_core::traits::ReviewSource;
use revizor_core::types::HomeworkRecord;

/// Wraps a [`ReviewSource`] and turns its raw JSON into validated records.
pub struct Poller<S> {
    source: S,
}

impl<S: ReviewSource> Poller<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch everything since `cursor`.
    ///
    /// Returns the records in server order plus the server-reported
    /// timestamp to use as the next cursor. Mutates nothing; advancing the
    /// cursor and updating the status table are the caller's decisions.
    pub async fn tick(&self, cursor: i64) -> Result<(Vec<HomeworkRecord>, i64)> {
        let response = self.source.fetch_updates(cursor).await?;

        let homeworks = response
            .get("homeworks")
            .ok_or_else(|| Error::MalformedResponse("missing \"homeworks\" field".into()))?
            .as_array()
            .ok_or_else(|| Error::MalformedResponse("\"homeworks\" is not a list".into()))?;

        let new_cursor = response
            .get("current_date")
            .and_then(|v| v.as_i64())
            .ok_or_else(|| {
                Error::MalformedResponse("missing \"current_date\" timestamp".into())
            })?;

        let records = homeworks
            .iter()
            .map(|value| {
                serde_json::from_value::<HomeworkRecord>(value.clone())
                    .map_err(|e| Error::MalformedResponse(format!("bad homework record: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok((records, new_cursor))
    }
}
