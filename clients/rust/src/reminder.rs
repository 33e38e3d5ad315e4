use crate::base::{APIResponse, BaseClient};
use bursdag_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Triggers a reminder run. The client has to be constructed with
    /// the server's reminder secret code as its api key.
    pub async fn send(&self) -> APIResponse<send_reminders::APIResponse> {
        self.base
            .post((), "reminders/send".into(), StatusCode::OK)
            .await
    }
}
