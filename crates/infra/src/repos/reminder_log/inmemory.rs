use super::IReminderLogRepo;
use bursdag_domain::{ReminderLog, ID};
use chrono::NaiveDate;
use std::sync::Mutex;

pub struct InMemoryReminderLogRepo {
    logs: Mutex<Vec<ReminderLog>>,
}

impl InMemoryReminderLogRepo {
    pub fn new() -> Self {
        Self {
            logs: Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IReminderLogRepo for InMemoryReminderLogRepo {
    async fn insert(&self, log: &ReminderLog) -> anyhow::Result<()> {
        let mut logs = self.logs.lock().unwrap();
        let duplicate = logs.iter().any(|l| {
            l.user_id == log.user_id
                && l.friend_id == log.friend_id
                && l.remind_for_date == log.remind_for_date
        });
        if duplicate {
            return Err(anyhow::anyhow!(
                "Reminder log entry already exists for user: {}, friend: {}, date: {}",
                log.user_id,
                log.friend_id,
                log.remind_for_date
            ));
        }
        logs.push(log.clone());
        Ok(())
    }

    async fn find_by_key(
        &self,
        user_id: &ID,
        friend_id: &ID,
        remind_for_date: NaiveDate,
    ) -> Option<ReminderLog> {
        let logs = self.logs.lock().unwrap();
        logs.iter()
            .find(|l| {
                l.user_id == *user_id
                    && l.friend_id == *friend_id
                    && l.remind_for_date == remind_for_date
            })
            .cloned()
    }
}
