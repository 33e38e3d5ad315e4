use crate::shared::entity::ID;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Outcome of a reminder delivery attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    Sent,
    Failed,
}

impl Display for ReminderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sent => write!(f, "sent"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

#[derive(Error, Debug)]
pub enum InvalidStatusError {
    #[error("Reminder status: {0} is not valid")]
    Malformed(String),
}

impl FromStr for ReminderStatus {
    type Err = InvalidStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sent" => Ok(Self::Sent),
            "failed" => Ok(Self::Failed),
            _ => Err(InvalidStatusError::Malformed(s.to_string())),
        }
    }
}

/// One delivery attempt for a `(user, friend, occurrence date)` triple.
///
/// There is at most one log entry per triple, which is what makes a
/// reminder run safe to re-trigger within the same day. Entries are only
/// ever inserted, never updated: a `failed` entry also suppresses any
/// further attempt for that occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderLog {
    pub user_id: ID,
    pub friend_id: ID,
    /// The birthday occurrence the reminder was for, including the
    /// occurrence year
    pub remind_for_date: NaiveDate,
    pub status: ReminderStatus,
    pub error_message: Option<String>,
    /// Millis timestamp of the delivery attempt
    pub created_at: i64,
}

impl ReminderLog {
    pub fn sent(user_id: ID, friend_id: ID, remind_for_date: NaiveDate, created_at: i64) -> Self {
        Self {
            user_id,
            friend_id,
            remind_for_date,
            status: ReminderStatus::Sent,
            error_message: None,
            created_at,
        }
    }

    pub fn failed(
        user_id: ID,
        friend_id: ID,
        remind_for_date: NaiveDate,
        error_message: String,
        created_at: i64,
    ) -> Self {
        Self {
            user_id,
            friend_id,
            remind_for_date,
            status: ReminderStatus::Failed,
            error_message: Some(error_message),
            created_at,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn status_roundtrips_through_strings() {
        assert_eq!(
            "sent".parse::<ReminderStatus>().unwrap(),
            ReminderStatus::Sent
        );
        assert_eq!(
            "failed".parse::<ReminderStatus>().unwrap(),
            ReminderStatus::Failed
        );
        assert!("pending".parse::<ReminderStatus>().is_err());
        assert_eq!(ReminderStatus::Sent.to_string(), "sent");
    }
}
