use crate::error::BursdagError;
use crate::shared::auth::protect_send_reminders_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use bursdag_api_structs::send_reminders::*;
use bursdag_domain::birthday::{days_until_birthday, is_reminder_due, next_occurrence};
use bursdag_domain::ReminderLog;
use bursdag_infra::{BirthdayReminderEmail, BursdagContext};
use tracing::{debug, error, info, warn};

pub async fn send_reminders_controller(
    http_req: HttpRequest,
    ctx: web::Data<BursdagContext>,
) -> Result<HttpResponse, BursdagError> {
    protect_send_reminders_route(&http_req, &ctx)?;

    let usecase = SendRemindersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| {
            HttpResponse::Ok().json(APIResponse {
                message: "Birthday reminders processed".into(),
                total_reminders_sent: usecase_res.total_reminders_sent,
                errors: usecase_res.errors,
                timestamp: usecase_res.timestamp,
            })
        })
        .map_err(BursdagError::from)
}

/// Walks every user and every friend once, delivers the reminders that
/// are due today and records each attempt in the reminder log.
///
/// The log lookup happens before the send and the log insert after it.
/// The composite key on the log is what keeps a re-trigger on the same
/// day from delivering twice, so a refused insert is interpreted as a
/// concurrent run having handled the friend already.
#[derive(Debug)]
pub struct SendRemindersUseCase {}

#[derive(Debug)]
pub struct UseCaseRes {
    pub total_reminders_sent: usize,
    pub errors: Vec<String>,
    pub timestamp: i64,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for BursdagError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendRemindersUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "SendReminders";

    async fn execute(&mut self, ctx: &BursdagContext) -> Result<Self::Response, Self::Error> {
        let today = ctx.sys.get_utc_date();
        info!("Starting birthday reminder check for {}", today);

        // Only a failure to load the user and friend collections aborts
        // the run, everything else is recorded per friend
        let users = ctx
            .repos
            .users
            .all()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let mut total_reminders_sent = 0;
        let mut errors: Vec<String> = Vec::new();

        for user in users {
            let friends = ctx
                .repos
                .friends
                .find_by_user(&user.id)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
            for friend in friends {
                let lead_days = friend.reminder_lead_days(user.reminder_default_days);
                if !is_reminder_due(friend.birthday, today, lead_days) {
                    continue;
                }

                // The log is keyed by the occurrence the reminder is
                // for, so last year's entry never shadows this year's
                let occurrence = next_occurrence(friend.birthday, today);
                if ctx
                    .repos
                    .reminder_logs
                    .find_by_key(&user.id, &friend.id, occurrence)
                    .await
                    .is_some()
                {
                    debug!(
                        "Reminder already sent for {}'s birthday to {}",
                        friend.name, user.email
                    );
                    continue;
                }

                let email = BirthdayReminderEmail {
                    friend_name: friend.name.clone(),
                    birthday: friend.birthday,
                    days_until: days_until_birthday(friend.birthday, today),
                    recipient_name: user.name.clone().unwrap_or_else(|| user.email.clone()),
                    recipient_email: user.email.clone(),
                };
                let delivered = ctx.mailer.send_birthday_reminder(&email).await;

                let now = ctx.sys.get_timestamp_millis();
                let log = if delivered {
                    ReminderLog::sent(user.id.clone(), friend.id.clone(), occurrence, now)
                } else {
                    errors.push(format!(
                        "Failed to send reminder for {} to {}",
                        friend.name, user.email
                    ));
                    ReminderLog::failed(
                        user.id.clone(),
                        friend.id.clone(),
                        occurrence,
                        "Email sending failed".into(),
                        now,
                    )
                };

                match ctx.repos.reminder_logs.insert(&log).await {
                    Ok(_) => {
                        if delivered {
                            total_reminders_sent += 1;
                            info!(
                                "Sent birthday reminder for {} to {}",
                                friend.name, user.email
                            );
                        }
                    }
                    Err(e) => {
                        let concurrent = ctx
                            .repos
                            .reminder_logs
                            .find_by_key(&user.id, &friend.id, occurrence)
                            .await
                            .is_some();
                        if concurrent {
                            warn!(
                                "Reminder log entry for {}'s birthday to {} was created by a concurrent run, skipping",
                                friend.name, user.email
                            );
                        } else {
                            error!("Error processing reminder for friend {}: {:?}", friend.id, e);
                            errors.push(format!(
                                "Error processing friend {}: could not record the delivery attempt",
                                friend.id
                            ));
                        }
                    }
                }
            }
        }

        Ok(UseCaseRes {
            total_reminders_sent,
            errors,
            timestamp: ctx.sys.get_timestamp_millis(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bursdag_domain::{Friend, ReminderStatus, User};
    use bursdag_infra::{setup_context_inmemory, ISys, InMemoryMailer};
    use chrono::NaiveDate;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    struct StaticDateSys {
        date: NaiveDate,
    }
    impl ISys for StaticDateSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.date.and_hms(12, 0, 0).timestamp_millis()
        }
        fn get_utc_date(&self) -> NaiveDate {
            self.date
        }
    }

    fn ctx_at(date: NaiveDate) -> (BursdagContext, Arc<InMemoryMailer>) {
        let mailer = Arc::new(InMemoryMailer::new());
        let mut ctx = setup_context_inmemory();
        ctx.sys = Arc::new(StaticDateSys { date });
        ctx.mailer = mailer.clone();
        (ctx, mailer)
    }

    async fn insert_user(ctx: &BursdagContext, email: &str) -> User {
        let user = User::new(email.into());
        ctx.repos.users.insert(&user).await.expect("To insert user");
        user
    }

    async fn insert_friend(
        ctx: &BursdagContext,
        user: &User,
        name: &str,
        birthday: NaiveDate,
        lead_override: Option<i64>,
    ) -> Friend {
        let mut friend = Friend::new(user.id.clone(), name.into(), birthday);
        friend.reminder_days_override = lead_override;
        ctx.repos
            .friends
            .insert(&friend)
            .await
            .expect("To insert friend");
        friend
    }

    #[tokio::test]
    async fn it_sends_reminder_one_day_ahead_across_february_end() {
        let today = NaiveDate::from_ymd(2023, 2, 28);
        let (ctx, mailer) = ctx_at(today);

        let user = insert_user(&ctx, "kari@nordmann.no").await;
        let friend =
            insert_friend(&ctx, &user, "Per", NaiveDate::from_ymd(1990, 3, 1), None).await;

        let res = execute(SendRemindersUseCase {}, &ctx).await.unwrap();

        assert_eq!(res.total_reminders_sent, 1);
        assert!(res.errors.is_empty());
        assert_eq!(mailer.sent_count(), 1);

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent[0].recipient_email, "kari@nordmann.no");
        assert_eq!(sent[0].days_until, 1);
        drop(sent);

        let log = ctx
            .repos
            .reminder_logs
            .find_by_key(&user.id, &friend.id, NaiveDate::from_ymd(2023, 3, 1))
            .await
            .expect("To find log entry");
        assert_eq!(log.status, ReminderStatus::Sent);
    }

    #[tokio::test]
    async fn it_does_not_send_twice_for_the_same_occurrence() {
        let today = NaiveDate::from_ymd(2023, 2, 28);
        let (ctx, mailer) = ctx_at(today);

        let user = insert_user(&ctx, "kari@nordmann.no").await;
        insert_friend(&ctx, &user, "Per", NaiveDate::from_ymd(1990, 3, 1), None).await;

        let first = execute(SendRemindersUseCase {}, &ctx).await.unwrap();
        assert_eq!(first.total_reminders_sent, 1);

        let second = execute(SendRemindersUseCase {}, &ctx).await.unwrap();
        assert_eq!(second.total_reminders_sent, 0);
        assert!(second.errors.is_empty());
        assert_eq!(mailer.sent_count(), 1);
    }

    #[tokio::test]
    async fn it_records_failed_sends_and_continues_with_other_friends() {
        let today = NaiveDate::from_ymd(2023, 6, 14);
        let (ctx, mailer) = ctx_at(today);
        mailer.fail_sends.store(true, Ordering::SeqCst);

        let user = insert_user(&ctx, "kari@nordmann.no").await;
        let friend =
            insert_friend(&ctx, &user, "Per", NaiveDate::from_ymd(1990, 6, 15), None).await;
        let other =
            insert_friend(&ctx, &user, "Espen", NaiveDate::from_ymd(1992, 6, 15), None).await;

        let res = execute(SendRemindersUseCase {}, &ctx).await.unwrap();

        assert_eq!(res.total_reminders_sent, 0);
        assert_eq!(res.errors.len(), 2);
        assert!(res.errors[0].contains("Failed to send reminder"));

        for friend_id in [&friend.id, &other.id].iter() {
            let log = ctx
                .repos
                .reminder_logs
                .find_by_key(&user.id, friend_id, NaiveDate::from_ymd(2023, 6, 15))
                .await
                .expect("To find log entry");
            assert_eq!(log.status, ReminderStatus::Failed);
            assert_eq!(log.error_message, Some("Email sending failed".into()));
        }
    }

    #[tokio::test]
    async fn it_does_not_retry_a_failed_occurrence() {
        let today = NaiveDate::from_ymd(2023, 6, 14);
        let (ctx, mailer) = ctx_at(today);
        mailer.fail_sends.store(true, Ordering::SeqCst);

        let user = insert_user(&ctx, "kari@nordmann.no").await;
        insert_friend(&ctx, &user, "Per", NaiveDate::from_ymd(1990, 6, 15), None).await;

        let first = execute(SendRemindersUseCase {}, &ctx).await.unwrap();
        assert_eq!(first.errors.len(), 1);

        // The mail provider recovers, but the failed log entry still
        // suppresses the occurrence
        mailer.fail_sends.store(false, Ordering::SeqCst);
        let second = execute(SendRemindersUseCase {}, &ctx).await.unwrap();
        assert_eq!(second.total_reminders_sent, 0);
        assert!(second.errors.is_empty());
        assert_eq!(mailer.sent_count(), 0);
    }

    #[tokio::test]
    async fn zero_lead_fires_on_the_birthday_itself() {
        let today = NaiveDate::from_ymd(2023, 6, 15);
        let (ctx, mailer) = ctx_at(today);

        let user = insert_user(&ctx, "kari@nordmann.no").await;
        insert_friend(&ctx, &user, "Per", NaiveDate::from_ymd(1990, 6, 15), Some(0)).await;

        let res = execute(SendRemindersUseCase {}, &ctx).await.unwrap();

        assert_eq!(res.total_reminders_sent, 1);
        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent[0].days_until, 0);
        assert_eq!(sent[0].subject(), "Today is Per's Birthday!");
    }

    #[tokio::test]
    async fn friends_with_same_birthday_and_different_leads_are_independent() {
        let birthday = NaiveDate::from_ymd(1990, 6, 15);
        let today = NaiveDate::from_ymd(2023, 6, 13);
        let (ctx, mailer) = ctx_at(today);

        let user = insert_user(&ctx, "kari@nordmann.no").await;
        insert_friend(&ctx, &user, "Per", birthday, Some(2)).await;
        insert_friend(&ctx, &user, "Espen", birthday, Some(5)).await;

        let res = execute(SendRemindersUseCase {}, &ctx).await.unwrap();

        assert_eq!(res.total_reminders_sent, 1);
        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].friend_name, "Per");
    }

    #[tokio::test]
    async fn the_user_default_lead_applies_without_an_override() {
        let today = NaiveDate::from_ymd(2023, 6, 12);
        let (ctx, _mailer) = ctx_at(today);

        let mut user = User::new("kari@nordmann.no".into());
        user.reminder_default_days = 3;
        ctx.repos.users.insert(&user).await.unwrap();
        insert_friend(&ctx, &user, "Per", NaiveDate::from_ymd(1990, 6, 15), None).await;

        let res = execute(SendRemindersUseCase {}, &ctx).await.unwrap();
        assert_eq!(res.total_reminders_sent, 1);
    }

    #[tokio::test]
    async fn friends_outside_the_window_are_left_alone() {
        let today = NaiveDate::from_ymd(2023, 6, 1);
        let (ctx, mailer) = ctx_at(today);

        let user = insert_user(&ctx, "kari@nordmann.no").await;
        let friend =
            insert_friend(&ctx, &user, "Per", NaiveDate::from_ymd(1990, 6, 15), None).await;

        let res = execute(SendRemindersUseCase {}, &ctx).await.unwrap();

        assert_eq!(res.total_reminders_sent, 0);
        assert!(res.errors.is_empty());
        assert_eq!(mailer.sent_count(), 0);
        assert!(ctx
            .repos
            .reminder_logs
            .find_by_key(&user.id, &friend.id, NaiveDate::from_ymd(2023, 6, 15))
            .await
            .is_none());
    }

    #[tokio::test]
    async fn it_processes_every_user_in_one_run() {
        let today = NaiveDate::from_ymd(2023, 6, 14);
        let (ctx, mailer) = ctx_at(today);

        let kari = insert_user(&ctx, "kari@nordmann.no").await;
        let ola = insert_user(&ctx, "ola@nordmann.no").await;
        insert_friend(&ctx, &kari, "Per", NaiveDate::from_ymd(1990, 6, 15), None).await;
        insert_friend(&ctx, &ola, "Espen", NaiveDate::from_ymd(1992, 6, 15), None).await;

        let res = execute(SendRemindersUseCase {}, &ctx).await.unwrap();

        assert_eq!(res.total_reminders_sent, 2);
        let sent = mailer.sent.lock().unwrap();
        let mut recipients = sent.iter().map(|e| e.recipient_email.clone()).collect::<Vec<_>>();
        recipients.sort();
        assert_eq!(recipients, vec!["kari@nordmann.no", "ola@nordmann.no"]);
    }
}
