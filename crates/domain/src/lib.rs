pub mod birthday;
mod friend;
mod reminder_log;
mod shared;
mod user;

pub use friend::Friend;
pub use reminder_log::{ReminderLog, ReminderStatus};
pub use shared::entity::{Entity, ID};
pub use user::User;
