mod friend;
mod reminder_log;
mod user;

use friend::{IFriendRepo, InMemoryFriendRepo, PostgresFriendRepo};
use reminder_log::{IReminderLogRepo, InMemoryReminderLogRepo, PostgresReminderLogRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use user::{IUserRepo, InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn IUserRepo>,
    pub friends: Arc<dyn IFriendRepo>,
    pub reminder_logs: Arc<dyn IReminderLogRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;

        Ok(Self {
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            friends: Arc::new(PostgresFriendRepo::new(pool.clone())),
            reminder_logs: Arc::new(PostgresReminderLogRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepo::new()),
            friends: Arc::new(InMemoryFriendRepo::new()),
            reminder_logs: Arc::new(InMemoryReminderLogRepo::new()),
        }
    }
}
