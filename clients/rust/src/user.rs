use crate::base::{APIResponse, BaseClient};
use bursdag_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserClient {
    base: Arc<BaseClient>,
}

pub struct CreateUserInput {
    pub email: String,
    pub name: Option<String>,
    pub reminder_default_days: Option<i64>,
}

pub struct UpdateMeInput {
    pub name: Option<String>,
    pub reminder_default_days: Option<i64>,
}

impl UserClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateUserInput) -> APIResponse<create_user::APIResponse> {
        let body = create_user::RequestBody {
            email: input.email,
            name: input.name,
            reminder_default_days: input.reminder_default_days,
        };
        self.base
            .post(body, "user".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_me(&self) -> APIResponse<get_me::APIResponse> {
        self.base.get("me".into(), StatusCode::OK).await
    }

    pub async fn update_me(&self, input: UpdateMeInput) -> APIResponse<update_me::APIResponse> {
        let body = update_me::RequestBody {
            name: input.name,
            reminder_default_days: input.reminder_default_days,
        };
        self.base.put(body, "me".into(), StatusCode::OK).await
    }
}
