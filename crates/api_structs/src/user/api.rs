use bursdag_domain::User;
use serde::{Deserialize, Serialize};

use crate::dtos::UserDTO;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user: UserDTO,
}

impl UserResponse {
    pub fn new(user: User) -> Self {
        Self {
            user: UserDTO::new(user),
        }
    }
}

pub mod create_user {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub email: String,
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub reminder_default_days: Option<i64>,
    }

    /// The secret api key is only ever returned here, at signup
    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub user: UserDTO,
        pub secret_api_key: String,
    }

    impl APIResponse {
        pub fn new(user: User) -> Self {
            Self {
                secret_api_key: user.secret_api_key.clone(),
                user: UserDTO::new(user),
            }
        }
    }
}

pub mod get_me {
    use super::*;

    pub type APIResponse = UserResponse;
}

pub mod update_me {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub reminder_default_days: Option<i64>,
    }

    pub type APIResponse = UserResponse;
}
