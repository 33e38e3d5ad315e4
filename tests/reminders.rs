mod helpers;

use bursdag_sdk::{BursdagSDK, CreateFriendInput, CreateUserInput};
use helpers::setup::spawn_app;
use helpers::utils::birthday_in_days;

#[actix_web::test]
async fn test_reminder_run_requires_the_secret_code() {
    let (_, sdk, address) = spawn_app().await;
    assert!(sdk.reminder.send().await.is_err());

    let wrong = BursdagSDK::new(address, "not-the-secret");
    assert!(wrong.reminder.send().await.is_err());
}

#[actix_web::test]
async fn test_reminder_run_is_idempotent_within_the_day() {
    let (app, sdk, address) = spawn_app().await;
    let res = sdk
        .user
        .create(CreateUserInput {
            email: "kari@nordmann.no".into(),
            name: Some("Kari".into()),
            reminder_default_days: None,
        })
        .await
        .expect("Expected to create user");
    let client = BursdagSDK::new(address.clone(), res.secret_api_key);

    // Birthday today with a zero lead: due in this run
    client
        .friend
        .create(CreateFriendInput {
            name: "Per".into(),
            birthday: birthday_in_days(0),
            email: None,
            timezone: None,
            reminder_days_override: Some(0),
            notes: None,
        })
        .await
        .expect("Expected to create friend");

    // Birthday in ten days: not due
    client
        .friend
        .create(CreateFriendInput {
            name: "Espen".into(),
            birthday: birthday_in_days(10),
            email: None,
            timezone: None,
            reminder_days_override: Some(0),
            notes: None,
        })
        .await
        .expect("Expected to create friend");

    let admin = BursdagSDK::new(address, app.config.send_reminders_secret_code.clone());
    let run = admin
        .reminder
        .send()
        .await
        .expect("Expected to trigger reminder run");
    assert_eq!(run.message, "Birthday reminders processed");
    assert_eq!(run.total_reminders_sent, 1);
    assert!(run.errors.is_empty());

    // Re-triggering on the same day delivers nothing new
    let rerun = admin
        .reminder
        .send()
        .await
        .expect("Expected to trigger reminder run");
    assert_eq!(rerun.total_reminders_sent, 0);
    assert!(rerun.errors.is_empty());
}
