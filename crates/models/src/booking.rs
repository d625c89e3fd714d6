use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Appointment request submitted from the booking form.
///
/// `agree_policy` must be present in the payload; its value is not forced to
/// `true`. Submitted strings are stored verbatim, no trimming or
/// case-folding.
#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct Booking {
    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub full_name: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    pub phone: Option<String>,
    pub service: String,
    pub category: String,
    pub preferred_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub agree_policy: bool,
}
