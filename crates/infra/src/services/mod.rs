mod mailer;

pub use mailer::{BirthdayReminderEmail, HttpMailer, IMailer, InMemoryMailer};
