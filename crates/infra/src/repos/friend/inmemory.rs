use super::IFriendRepo;
use bursdag_domain::{Friend, ID};
use std::sync::Mutex;

pub struct InMemoryFriendRepo {
    friends: Mutex<Vec<Friend>>,
}

impl InMemoryFriendRepo {
    pub fn new() -> Self {
        Self {
            friends: Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IFriendRepo for InMemoryFriendRepo {
    async fn insert(&self, friend: &Friend) -> anyhow::Result<()> {
        let mut friends = self.friends.lock().unwrap();
        friends.push(friend.clone());
        Ok(())
    }

    async fn save(&self, friend: &Friend) -> anyhow::Result<()> {
        let mut friends = self.friends.lock().unwrap();
        if let Some(existing) = friends.iter_mut().find(|f| f.id == friend.id) {
            *existing = friend.clone();
        }
        Ok(())
    }

    async fn delete(&self, friend_id: &ID) -> Option<Friend> {
        let mut friends = self.friends.lock().unwrap();
        let pos = friends.iter().position(|f| f.id == *friend_id)?;
        Some(friends.remove(pos))
    }

    async fn find(&self, friend_id: &ID) -> Option<Friend> {
        let friends = self.friends.lock().unwrap();
        friends.iter().find(|f| f.id == *friend_id).cloned()
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Friend>> {
        let friends = self.friends.lock().unwrap();
        let mut friends = friends
            .iter()
            .filter(|f| f.user_id == *user_id)
            .cloned()
            .collect::<Vec<_>>();
        friends.sort_by_key(|f| f.birthday);
        Ok(friends)
    }
}
