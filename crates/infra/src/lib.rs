mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, MailSettings};
use repos::Repos;
pub use services::{BirthdayReminderEmail, HttpMailer, IMailer, InMemoryMailer};
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

#[derive(Clone)]
pub struct BursdagContext {
    pub repos: Repos,
    pub config: Config,
    pub mailer: Arc<dyn IMailer>,
    pub sys: Arc<dyn ISys>,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl BursdagContext {
    async fn create(params: ContextParams) -> Self {
        let repos = Repos::create_postgres(&params.postgres_connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        let config = Config::new();
        let mail_settings = config
            .mail
            .clone()
            .expect("MAIL_API_URL, MAIL_API_KEY and MAIL_FROM env vars to be present");
        Self {
            repos,
            config,
            mailer: Arc::new(HttpMailer::new(&mail_settings)),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> BursdagContext {
    BursdagContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string(),
    })
    .await
}

/// Context backed by in memory storage and an in memory mailer. Used by
/// the test suites, which cannot assume a running postgres or a mail
/// provider.
pub fn setup_context_inmemory() -> BursdagContext {
    BursdagContext {
        repos: Repos::create_inmemory(),
        config: Config::new(),
        mailer: Arc::new(InMemoryMailer::new()),
        sys: Arc::new(RealSys {}),
    }
}

fn get_psql_connection_string() -> String {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING)
        .unwrap_or_else(|_| panic!("{} env var to be present.", PSQL_CONNECTION_STRING))
}

pub async fn run_migration() -> Result<(), MigrateError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&get_psql_connection_string())
        .await
        .expect("TO CONNECT TO POSTGRES");

    sqlx::migrate!().run(&pool).await
}
