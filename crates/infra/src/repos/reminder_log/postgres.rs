use super::IReminderLogRepo;
use bursdag_domain::{ReminderLog, ReminderStatus, ID};
use chrono::NaiveDate;
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresReminderLogRepo {
    pool: PgPool,
}

impl PostgresReminderLogRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderLogRaw {
    user_uid: Uuid,
    friend_uid: Uuid,
    remind_for_date: NaiveDate,
    status: String,
    error_message: Option<String>,
    created_at: i64,
}

impl Into<ReminderLog> for ReminderLogRaw {
    fn into(self) -> ReminderLog {
        ReminderLog {
            user_id: self.user_uid.into(),
            friend_id: self.friend_uid.into(),
            remind_for_date: self.remind_for_date,
            status: self.status.parse().unwrap_or(ReminderStatus::Failed),
            error_message: self.error_message,
            created_at: self.created_at,
        }
    }
}

#[async_trait::async_trait]
impl IReminderLogRepo for PostgresReminderLogRepo {
    async fn insert(&self, log: &ReminderLog) -> anyhow::Result<()> {
        // The primary key on (user_uid, friend_uid, remind_for_date)
        // rejects a second entry for the same occurrence
        sqlx::query(
            r#"
            INSERT INTO reminder_logs
            (user_uid, friend_uid, remind_for_date, status, error_message, created_at)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(log.user_id.inner_ref())
        .bind(log.friend_id.inner_ref())
        .bind(log.remind_for_date)
        .bind(log.status.to_string())
        .bind(&log.error_message)
        .bind(log.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_key(
        &self,
        user_id: &ID,
        friend_id: &ID,
        remind_for_date: NaiveDate,
    ) -> Option<ReminderLog> {
        match sqlx::query_as::<_, ReminderLogRaw>(
            r#"
            SELECT * FROM reminder_logs AS r
            WHERE r.user_uid = $1 AND
            r.friend_uid = $2 AND
            r.remind_for_date = $3
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(friend_id.inner_ref())
        .bind(remind_for_date)
        .fetch_one(&self.pool)
        .await
        {
            Ok(log) => Some(log.into()),
            Err(_) => None,
        }
    }
}
