use bursdag_domain::{Friend, ID};
use serde::{Deserialize, Serialize};

use crate::dtos::{FriendDTO, UpcomingBirthdayDTO};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendResponse {
    pub friend: FriendDTO,
}

impl FriendResponse {
    pub fn new(friend: Friend) -> Self {
        Self {
            friend: FriendDTO::new(friend),
        }
    }
}

pub mod create_friend {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        /// `YYYY-MM-DD`, validated against the calendar
        pub birthday: String,
        #[serde(default)]
        pub email: Option<String>,
        #[serde(default)]
        pub timezone: Option<String>,
        #[serde(default)]
        pub reminder_days_override: Option<i64>,
        #[serde(default)]
        pub notes: Option<String>,
    }

    pub type APIResponse = FriendResponse;
}

pub mod get_friends {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub friends: Vec<FriendDTO>,
    }

    impl APIResponse {
        pub fn new(friends: Vec<Friend>) -> Self {
            Self {
                friends: friends.into_iter().map(FriendDTO::new).collect(),
            }
        }
    }
}

pub mod get_upcoming_birthdays {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        #[serde(default)]
        pub days: Option<i64>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub upcoming: Vec<UpcomingBirthdayDTO>,
    }
}

pub mod get_friend {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub friend_id: ID,
    }

    pub type APIResponse = FriendResponse;
}

pub mod update_friend {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub friend_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub birthday: String,
        #[serde(default)]
        pub email: Option<String>,
        #[serde(default)]
        pub timezone: Option<String>,
        #[serde(default)]
        pub reminder_days_override: Option<i64>,
        #[serde(default)]
        pub notes: Option<String>,
    }

    pub type APIResponse = FriendResponse;
}

pub mod delete_friend {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub friend_id: ID,
    }

    pub type APIResponse = FriendResponse;
}
