mod inmemory;
mod postgres;

use bursdag_domain::{Friend, ID};
pub use inmemory::InMemoryFriendRepo;
pub use postgres::PostgresFriendRepo;

#[async_trait::async_trait]
pub trait IFriendRepo: Send + Sync {
    async fn insert(&self, friend: &Friend) -> anyhow::Result<()>;
    async fn save(&self, friend: &Friend) -> anyhow::Result<()>;
    async fn delete(&self, friend_id: &ID) -> Option<Friend>;
    async fn find(&self, friend_id: &ID) -> Option<Friend>;
    /// All friends owned by the user, ordered by birthday
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Friend>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::Repos;
    use bursdag_domain::User;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_friends_are_scoped_to_their_owner() {
        let repos = Repos::create_inmemory();

        let owner = User::new("kari@nordmann.no".into());
        let other = User::new("ola@nordmann.no".into());
        repos.users.insert(&owner).await.expect("To insert user");
        repos.users.insert(&other).await.expect("To insert user");

        let friend = Friend::new(
            owner.id.clone(),
            "Per".into(),
            NaiveDate::from_ymd(1990, 6, 15),
        );
        repos
            .friends
            .insert(&friend)
            .await
            .expect("To insert friend");

        let owned = repos
            .friends
            .find_by_user(&owner.id)
            .await
            .expect("To list friends");
        assert_eq!(owned.len(), 1);
        assert!(repos
            .friends
            .find_by_user(&other.id)
            .await
            .expect("To list friends")
            .is_empty());
    }

    #[tokio::test]
    async fn test_friends_are_ordered_by_birthday() {
        let repos = Repos::create_inmemory();

        let owner = User::new("kari@nordmann.no".into());
        repos.users.insert(&owner).await.expect("To insert user");

        // The ordering is on the full stored date, year included
        let mut december = Friend::new(
            owner.id.clone(),
            "Per".into(),
            NaiveDate::from_ymd(1990, 12, 24),
        );
        let march = Friend::new(
            owner.id.clone(),
            "Espen".into(),
            NaiveDate::from_ymd(1990, 3, 1),
        );
        repos
            .friends
            .insert(&december)
            .await
            .expect("To insert friend");
        repos
            .friends
            .insert(&march)
            .await
            .expect("To insert friend");

        let friends = repos
            .friends
            .find_by_user(&owner.id)
            .await
            .expect("To list friends");
        assert_eq!(friends[0].name, "Espen");
        assert_eq!(friends[1].name, "Per");

        december.birthday = NaiveDate::from_ymd(1990, 1, 2);
        repos
            .friends
            .save(&december)
            .await
            .expect("To save friend");
        let friends = repos
            .friends
            .find_by_user(&owner.id)
            .await
            .expect("To list friends");
        assert_eq!(friends[0].name, "Per");
    }
}
