use crate::config::MailSettings;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::error;

/// Everything needed to render and address one reminder email
#[derive(Debug, Clone)]
pub struct BirthdayReminderEmail {
    pub friend_name: String,
    pub birthday: NaiveDate,
    pub days_until: i64,
    pub recipient_name: String,
    pub recipient_email: String,
}

impl BirthdayReminderEmail {
    pub fn subject(&self) -> String {
        if self.days_until == 0 {
            format!("Today is {}'s Birthday!", self.friend_name)
        } else {
            format!(
                "{}'s Birthday is in {} day{}",
                self.friend_name,
                self.days_until,
                if self.days_until == 1 { "" } else { "s" }
            )
        }
    }

    pub fn html_body(&self) -> String {
        let heading = if self.days_until == 0 {
            format!("Today is {}'s Birthday!", self.friend_name)
        } else {
            format!(
                "{} day{} until {}'s Birthday!",
                self.days_until,
                if self.days_until == 1 { "" } else { "s" },
                self.friend_name
            )
        };
        format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <h1>Birthday Reminder</h1>
  <h2>{}</h2>
  <p><strong>Birthday:</strong> {}</p>
  <p>Don't forget to wish {} a happy birthday!</p>
</div>"#,
            heading,
            self.birthday.format("%A, %B %-d, %Y"),
            self.friend_name
        )
    }
}

/// Outbound reminder delivery. Failures are signaled with `false`, never
/// with a panic or an error type, and the caller records them in the
/// reminder log.
#[async_trait::async_trait]
pub trait IMailer: Send + Sync {
    async fn send_birthday_reminder(&self, email: &BirthdayReminderEmail) -> bool;
}

/// Delivers through a transactional mail HTTP API
pub struct HttpMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
}

impl HttpMailer {
    pub fn new(settings: &MailSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: settings.api_url.clone(),
            api_key: settings.api_key.clone(),
            from: settings.from.clone(),
        }
    }
}

#[async_trait::async_trait]
impl IMailer for HttpMailer {
    async fn send_birthday_reminder(&self, email: &BirthdayReminderEmail) -> bool {
        let payload = serde_json::json!({
            "from": self.from,
            "to": email.recipient_email,
            "subject": email.subject(),
            "html": email.html_body(),
        });
        match self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
        {
            Ok(res) if res.status().is_success() => true,
            Ok(res) => {
                error!(
                    "Mail api rejected reminder for {}: status {}",
                    email.recipient_email,
                    res.status()
                );
                false
            }
            Err(e) => {
                error!(
                    "Error sending reminder to {}: {:?}",
                    email.recipient_email, e
                );
                false
            }
        }
    }
}

/// Mailer that records outgoing emails instead of delivering them. Used
/// by the test suites, which also flip `fail_sends` to exercise the
/// failure path.
pub struct InMemoryMailer {
    pub sent: Mutex<Vec<BirthdayReminderEmail>>,
    pub fail_sends: AtomicBool,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(vec![]),
            fail_sends: AtomicBool::new(false),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl IMailer for InMemoryMailer {
    async fn send_birthday_reminder(&self, email: &BirthdayReminderEmail) -> bool {
        if self.fail_sends.load(Ordering::SeqCst) {
            return false;
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(email.clone());
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn reminder(days_until: i64) -> BirthdayReminderEmail {
        BirthdayReminderEmail {
            friend_name: "Per".into(),
            birthday: NaiveDate::from_ymd(1990, 6, 15),
            days_until,
            recipient_name: "Kari".into(),
            recipient_email: "kari@nordmann.no".into(),
        }
    }

    #[test]
    fn subject_on_the_birthday() {
        assert_eq!(reminder(0).subject(), "Today is Per's Birthday!");
    }

    #[test]
    fn subject_ahead_of_the_birthday() {
        assert_eq!(reminder(1).subject(), "Per's Birthday is in 1 day");
        assert_eq!(reminder(3).subject(), "Per's Birthday is in 3 days");
    }

    #[tokio::test]
    async fn inmemory_mailer_records_and_fails_on_demand() {
        let mailer = InMemoryMailer::new();
        assert!(mailer.send_birthday_reminder(&reminder(2)).await);
        assert_eq!(mailer.sent_count(), 1);

        mailer.fail_sends.store(true, Ordering::SeqCst);
        assert!(!mailer.send_birthday_reminder(&reminder(2)).await);
        assert_eq!(mailer.sent_count(), 1);
    }
}
