mod base;
mod friend;
mod reminder;
mod status;
mod user;

use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use friend::FriendClient;
pub use friend::{CreateFriendInput, UpdateFriendInput};
use reminder::ReminderClient;
use status::StatusClient;
use std::sync::Arc;
use user::UserClient;
pub use user::{CreateUserInput, UpdateMeInput};

pub use bursdag_api_structs::dtos::*;
pub use bursdag_domain::ID;

// Domain
pub use bursdag_api_structs::dtos::FriendDTO as Friend;
pub use bursdag_api_structs::dtos::UpcomingBirthdayDTO as UpcomingBirthday;
pub use bursdag_api_structs::dtos::UserDTO as User;

/// Bursdag Server SDK
///
/// The SDK contains methods for interacting with the Bursdag server API.
#[derive(Clone)]
pub struct BursdagSDK {
    pub friend: FriendClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
    pub user: UserClient,
}

impl BursdagSDK {
    pub fn new<T: Into<String>>(address: String, api_key: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_api_key(api_key.into());
        let base = Arc::new(base);
        let friend = FriendClient::new(base.clone());
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base.clone());
        let user = UserClient::new(base);

        Self {
            friend,
            reminder,
            status,
            user,
        }
    }
}
