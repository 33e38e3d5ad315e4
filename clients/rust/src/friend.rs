use crate::base::{APIResponse, BaseClient};
use bursdag_api_structs::*;
use bursdag_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct FriendClient {
    base: Arc<BaseClient>,
}

pub struct CreateFriendInput {
    pub name: String,
    /// `YYYY-MM-DD`
    pub birthday: String,
    pub email: Option<String>,
    pub timezone: Option<String>,
    pub reminder_days_override: Option<i64>,
    pub notes: Option<String>,
}

pub struct UpdateFriendInput {
    pub friend_id: ID,
    pub name: String,
    pub birthday: String,
    pub email: Option<String>,
    pub timezone: Option<String>,
    pub reminder_days_override: Option<i64>,
    pub notes: Option<String>,
}

impl FriendClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateFriendInput,
    ) -> APIResponse<create_friend::APIResponse> {
        let body = create_friend::RequestBody {
            name: input.name,
            birthday: input.birthday,
            email: input.email,
            timezone: input.timezone,
            reminder_days_override: input.reminder_days_override,
            notes: input.notes,
        };
        self.base
            .post(body, "friend".into(), StatusCode::CREATED)
            .await
    }

    pub async fn list(&self) -> APIResponse<get_friends::APIResponse> {
        self.base.get("friend".into(), StatusCode::OK).await
    }

    pub async fn upcoming(
        &self,
        days: Option<i64>,
    ) -> APIResponse<get_upcoming_birthdays::APIResponse> {
        let path = match days {
            Some(days) => format!("friend/upcoming?days={}", days),
            None => "friend/upcoming".into(),
        };
        self.base.get(path, StatusCode::OK).await
    }

    pub async fn get(&self, friend_id: ID) -> APIResponse<get_friend::APIResponse> {
        self.base
            .get(format!("friend/{}", friend_id), StatusCode::OK)
            .await
    }

    pub async fn update(
        &self,
        input: UpdateFriendInput,
    ) -> APIResponse<update_friend::APIResponse> {
        let body = update_friend::RequestBody {
            name: input.name,
            birthday: input.birthday,
            email: input.email,
            timezone: input.timezone,
            reminder_days_override: input.reminder_days_override,
            notes: input.notes,
        };
        self.base
            .put(body, format!("friend/{}", input.friend_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, friend_id: ID) -> APIResponse<delete_friend::APIResponse> {
        self.base
            .delete(format!("friend/{}", friend_id), StatusCode::OK)
            .await
    }
}
