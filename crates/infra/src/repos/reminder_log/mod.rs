mod inmemory;
mod postgres;

use bursdag_domain::{ReminderLog, ID};
use chrono::NaiveDate;
pub use inmemory::InMemoryReminderLogRepo;
pub use postgres::PostgresReminderLogRepo;

/// Log entries are write once. The storage enforces at most one entry
/// per `(user, friend, remind_for_date)` and `insert` fails on a
/// duplicate, which callers treat as "already sent".
#[async_trait::async_trait]
pub trait IReminderLogRepo: Send + Sync {
    async fn insert(&self, log: &ReminderLog) -> anyhow::Result<()>;
    async fn find_by_key(
        &self,
        user_id: &ID,
        friend_id: &ID,
        remind_for_date: NaiveDate,
    ) -> Option<ReminderLog>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::Repos;
    use bursdag_domain::{Friend, User};

    #[tokio::test]
    async fn test_duplicate_log_entries_are_rejected() {
        let repos = Repos::create_inmemory();

        let user = User::new("kari@nordmann.no".into());
        let friend = Friend::new(
            user.id.clone(),
            "Per".into(),
            NaiveDate::from_ymd(1990, 6, 15),
        );
        let date = NaiveDate::from_ymd(2023, 6, 15);

        let log = ReminderLog::sent(user.id.clone(), friend.id.clone(), date, 0);
        repos
            .reminder_logs
            .insert(&log)
            .await
            .expect("To insert log entry");

        let duplicate = ReminderLog::failed(
            user.id.clone(),
            friend.id.clone(),
            date,
            "Email sending failed".into(),
            1,
        );
        assert!(repos.reminder_logs.insert(&duplicate).await.is_err());

        let found = repos
            .reminder_logs
            .find_by_key(&user.id, &friend.id, date)
            .await
            .expect("To find log entry");
        assert_eq!(found.status, bursdag_domain::ReminderStatus::Sent);
    }

    #[tokio::test]
    async fn test_key_includes_the_occurrence_date() {
        let repos = Repos::create_inmemory();

        let user = User::new("kari@nordmann.no".into());
        let friend = Friend::new(
            user.id.clone(),
            "Per".into(),
            NaiveDate::from_ymd(1990, 6, 15),
        );

        let this_year = NaiveDate::from_ymd(2023, 6, 15);
        let next_year = NaiveDate::from_ymd(2024, 6, 15);

        let log = ReminderLog::sent(user.id.clone(), friend.id.clone(), this_year, 0);
        repos
            .reminder_logs
            .insert(&log)
            .await
            .expect("To insert log entry");

        // Same friend, next year's occurrence: a fresh key
        assert!(repos
            .reminder_logs
            .find_by_key(&user.id, &friend.id, next_year)
            .await
            .is_none());
        let log = ReminderLog::sent(user.id.clone(), friend.id.clone(), next_year, 0);
        assert!(repos.reminder_logs.insert(&log).await.is_ok());
    }
}
