use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use chrono_tz::Tz;

/// A `Friend` belongs to exactly one `User` and carries the birthday the
/// reminders are computed from.
#[derive(Debug, Clone)]
pub struct Friend {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    pub email: Option<String>,
    /// Full calendar date. Only month and day matter for the yearly
    /// recurrence, the year is informational.
    pub birthday: NaiveDate,
    /// Stored and validated but not yet applied to the reminder date
    /// math, which runs on a single UTC calendar
    pub timezone: Tz,
    /// Overrides the owner's default reminder lead when present
    pub reminder_days_override: Option<i64>,
    pub notes: Option<String>,
}

impl Friend {
    pub fn new(user_id: ID, name: String, birthday: NaiveDate) -> Self {
        Self {
            id: Default::default(),
            user_id,
            name,
            email: None,
            birthday,
            timezone: Tz::UTC,
            reminder_days_override: None,
            notes: None,
        }
    }

    /// The reminder lead in days for this friend, falling back to the
    /// owner's default when no override is set
    pub fn reminder_lead_days(&self, user_default: i64) -> i64 {
        self.reminder_days_override.unwrap_or(user_default)
    }
}

impl Entity for Friend {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn override_takes_precedence_over_user_default() {
        let mut friend = Friend::new(
            Default::default(),
            "Ola".into(),
            NaiveDate::from_ymd(1990, 6, 15),
        );
        assert_eq!(friend.reminder_lead_days(3), 3);

        friend.reminder_days_override = Some(7);
        assert_eq!(friend.reminder_lead_days(3), 7);

        friend.reminder_days_override = Some(0);
        assert_eq!(friend.reminder_lead_days(3), 0);
    }
}
