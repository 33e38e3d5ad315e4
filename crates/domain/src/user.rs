use crate::shared::entity::{Entity, ID};
use bursdag_utils::create_random_secret;

const API_KEY_LEN: usize = 30;

/// How many days ahead of a birthday a reminder fires when the user has
/// not configured anything else
pub const DEFAULT_REMINDER_LEAD_DAYS: i64 = 1;

/// A `User` owns a collection of `Friend`s and receives the birthday
/// reminder emails for them.
#[derive(Debug, Clone)]
pub struct User {
    pub id: ID,
    pub email: String,
    pub name: Option<String>,
    /// Reminder lead time in days, used for every `Friend` without an
    /// override of their own
    pub reminder_default_days: i64,
    /// Bearer credential identifying the user on API requests
    pub secret_api_key: String,
}

impl User {
    pub fn new(email: String) -> Self {
        Self {
            id: Default::default(),
            email,
            name: None,
            reminder_default_days: DEFAULT_REMINDER_LEAD_DAYS,
            secret_api_key: Self::generate_secret_api_key(),
        }
    }

    pub fn generate_secret_api_key() -> String {
        let rand_secret = create_random_secret(API_KEY_LEN);
        format!("sk_{}", rand_secret)
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_creates_user_with_api_key() {
        let user = User::new("jane@doe.com".into());
        assert!(user.secret_api_key.starts_with("sk_"));
        assert!(user.secret_api_key.len() > API_KEY_LEN);
        assert_eq!(user.reminder_default_days, DEFAULT_REMINDER_LEAD_DAYS);
    }
}
