mod inmemory;
mod postgres;

use bursdag_domain::{User, ID};
pub use inmemory::InMemoryUserRepo;
pub use postgres::PostgresUserRepo;

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn save(&self, user: &User) -> anyhow::Result<()>;
    async fn delete(&self, user_id: &ID) -> Option<User>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    async fn find_by_email(&self, email: &str) -> Option<User>;
    async fn find_by_api_key(&self, api_key: &str) -> Option<User>;
    /// Every user in the store. The reminder run iterates this, a
    /// failure here aborts the whole run.
    async fn all(&self) -> anyhow::Result<Vec<User>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::Repos;

    #[tokio::test]
    async fn test_user_lookups() {
        let repos = Repos::create_inmemory();

        let user = User::new("kari@nordmann.no".into());
        repos.users.insert(&user).await.expect("To insert user");

        let by_id = repos.users.find(&user.id).await.expect("To find user");
        assert_eq!(by_id.email, user.email);

        let by_email = repos
            .users
            .find_by_email("kari@nordmann.no")
            .await
            .expect("To find user by email");
        assert_eq!(by_email.id, user.id);

        let by_key = repos
            .users
            .find_by_api_key(&user.secret_api_key)
            .await
            .expect("To find user by api key");
        assert_eq!(by_key.id, user.id);

        assert!(repos.users.find_by_api_key("sk_bogus").await.is_none());
    }

    #[tokio::test]
    async fn test_user_save_and_delete() {
        let repos = Repos::create_inmemory();

        let mut user = User::new("ola@nordmann.no".into());
        repos.users.insert(&user).await.expect("To insert user");

        user.reminder_default_days = 7;
        user.name = Some("Ola".into());
        repos.users.save(&user).await.expect("To save user");

        let found = repos.users.find(&user.id).await.expect("To find user");
        assert_eq!(found.reminder_default_days, 7);
        assert_eq!(found.name, Some("Ola".into()));

        assert!(repos.users.delete(&user.id).await.is_some());
        assert!(repos.users.find(&user.id).await.is_none());
        assert!(repos.users.all().await.expect("To list users").is_empty());
    }
}
