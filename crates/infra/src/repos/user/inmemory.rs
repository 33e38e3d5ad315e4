use super::IUserRepo;
use bursdag_domain::{User, ID};
use std::sync::Mutex;

pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        let mut users = self.users.lock().unwrap();
        users.push(user.clone());
        Ok(())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        let mut users = self.users.lock().unwrap();
        if let Some(existing) = users.iter_mut().find(|u| u.id == user.id) {
            *existing = user.clone();
        }
        Ok(())
    }

    async fn delete(&self, user_id: &ID) -> Option<User> {
        let mut users = self.users.lock().unwrap();
        let pos = users.iter().position(|u| u.id == *user_id)?;
        Some(users.remove(pos))
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        let users = self.users.lock().unwrap();
        users.iter().find(|u| u.id == *user_id).cloned()
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        let users = self.users.lock().unwrap();
        users.iter().find(|u| u.email == email).cloned()
    }

    async fn find_by_api_key(&self, api_key: &str) -> Option<User> {
        let users = self.users.lock().unwrap();
        users.iter().find(|u| u.secret_api_key == api_key).cloned()
    }

    async fn all(&self) -> anyhow::Result<Vec<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.clone())
    }
}
