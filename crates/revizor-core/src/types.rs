//! Homework data model — the records the review API reports on.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One homework item as reported by the review API.
///
/// The wire field for the title is `homework_name`; `status` stays a raw
/// string here so an unrecognized value surfaces as [`Error::UnknownStatus`]
/// at diff time rather than as a parse failure of the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeworkRecord {
    pub id: i64,
    #[serde(rename = "homework_name")]
    pub name: String,
    pub status: String,
}

/// Review verdict states a homework item can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Parse the wire status string.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(Error::UnknownStatus(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Fixed human-readable verdict text shown in chat.
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl std::fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(
            HomeworkStatus::parse("approved").unwrap(),
            HomeworkStatus::Approved
        );
        assert_eq!(
            HomeworkStatus::parse("reviewing").unwrap(),
            HomeworkStatus::Reviewing
        );
        assert_eq!(
            HomeworkStatus::parse("rejected").unwrap(),
            HomeworkStatus::Rejected
        );
    }

    #[test]
    fn test_parse_unknown_status() {
        let err = HomeworkStatus::parse("archived").unwrap_err();
        assert!(matches!(err, Error::UnknownStatus(s) if s == "archived"));
    }

    #[test]
    fn test_verdict_texts_are_distinct() {
        let verdicts = [
            HomeworkStatus::Approved.verdict(),
            HomeworkStatus::Reviewing.verdict(),
            HomeworkStatus::Rejected.verdict(),
        ];
        assert_eq!(
            verdicts.len(),
            verdicts.iter().collect::<std::collections::HashSet<_>>().len()
        );
    }

    #[test]
    fn test_record_wire_format() {
        let record: HomeworkRecord = serde_json::from_str(
            r#"{"id": 123, "homework_name": "hw1.zip", "status": "reviewing"}"#,
        )
        .unwrap();
        assert_eq!(record.id, 123);
        assert_eq!(record.name, "hw1.zip");
        assert_eq!(record.status, "reviewing");
    }
}
