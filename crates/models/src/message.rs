use serde::{Deserialize, Serialize};
use validator::Validate;

/// Contact form message.
#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct Message {
    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub full_name: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[validate(length(min = 3, message = "must be at least 3 characters"))]
    pub subject: String,
    #[validate(length(min = 10, message = "must be at least 10 characters"))]
    pub message: String,
}
