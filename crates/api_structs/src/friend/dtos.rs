use bursdag_domain::{Friend, ID};
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendDTO {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    pub email: Option<String>,
    pub birthday: NaiveDate,
    pub timezone: Tz,
    pub reminder_days_override: Option<i64>,
    pub notes: Option<String>,
}

impl FriendDTO {
    pub fn new(friend: Friend) -> Self {
        Self {
            id: friend.id,
            user_id: friend.user_id,
            name: friend.name,
            email: friend.email,
            birthday: friend.birthday,
            timezone: friend.timezone,
            reminder_days_override: friend.reminder_days_override,
            notes: friend.notes,
        }
    }
}

/// A friend with their birthday resolved against the current date
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingBirthdayDTO {
    pub friend: FriendDTO,
    pub next_occurrence: NaiveDate,
    pub days_until: i64,
}
