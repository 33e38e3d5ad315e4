use serde::{Deserialize, Serialize};

pub mod send_reminders {
    use super::*;

    /// Summary of one reminder run
    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
        pub total_reminders_sent: usize,
        pub errors: Vec<String>,
        /// Millis timestamp of the run
        pub timestamp: i64,
    }
}
