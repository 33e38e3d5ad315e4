use bursdag_utils::create_random_secret;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Secret code guarding the reminder run trigger endpoint. The cron
    /// or webhook invoking it must present this as a bearer token.
    pub send_reminders_secret_code: String,
    /// Port for the application to run on
    pub port: usize,
    /// UTC hour (0-23) at which the daily reminder job fires
    pub reminders_job_hour_utc: u32,
    /// Outgoing mail provider credentials. `None` means the server
    /// cannot deliver reminder emails, which is only acceptable in tests.
    pub mail: Option<MailSettings>,
}

#[derive(Debug, Clone)]
pub struct MailSettings {
    /// HTTP endpoint of the transactional mail API
    pub api_url: String,
    pub api_key: String,
    /// From address for the reminder emails
    pub from: String,
}

impl MailSettings {
    fn from_env() -> Option<Self> {
        let api_url = std::env::var("MAIL_API_URL").ok()?;
        let api_key = std::env::var("MAIL_API_KEY").ok()?;
        let from = std::env::var("MAIL_FROM").ok()?;
        Some(Self {
            api_url,
            api_key,
            from,
        })
    }
}

impl Config {
    pub fn new() -> Self {
        let send_reminders_secret_code = match std::env::var("SEND_REMINDERS_SECRET_CODE") {
            Ok(code) => code,
            Err(_) => {
                info!("Did not find SEND_REMINDERS_SECRET_CODE environment variable. Going to create one.");
                let code = create_random_secret(16);
                info!(
                    "Secret code for triggering reminder runs was generated and set to: {}",
                    code
                );
                code
            }
        };
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };
        let default_job_hour = 8;
        let reminders_job_hour_utc = match std::env::var("REMINDERS_JOB_HOUR_UTC") {
            Ok(hour) => match hour.parse::<u32>() {
                Ok(hour) if hour < 24 => hour,
                _ => {
                    warn!(
                        "The given REMINDERS_JOB_HOUR_UTC: {} is not valid, falling back to the default hour: {}.",
                        hour, default_job_hour
                    );
                    default_job_hour
                }
            },
            Err(_) => default_job_hour,
        };
        let mail = MailSettings::from_env();
        if mail.is_none() {
            info!("Did not find MAIL_API_URL, MAIL_API_KEY and MAIL_FROM environment variables. Outgoing email is not configured.");
        }
        Self {
            send_reminders_secret_code,
            port,
            reminders_job_hour_utc,
            mail,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
