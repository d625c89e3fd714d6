use serde::{Deserialize, Serialize};
use validator::Validate;

/// Newsletter signup. `consent` must be present but is not required to be
/// `true` (presence-only check, matching the signup form contract).
#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct Newsletter {
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    pub consent: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_valid_signup() {
        let sub: Newsletter =
            serde_json::from_value(json!({ "email": "a@b.com", "consent": true }))
                .expect("deserialize");
        assert!(sub.validate().is_ok());
    }

    #[test]
    fn consent_false_is_accepted() {
        let sub: Newsletter =
            serde_json::from_value(json!({ "email": "a@b.com", "consent": false }))
                .expect("deserialize");
        assert!(sub.validate().is_ok());
    }

    #[test]
    fn missing_consent_is_rejected() {
        assert!(serde_json::from_value::<Newsletter>(json!({ "email": "a@b.com" })).is_err());
    }

    #[test]
    fn rejects_invalid_email_syntax() {
        let sub: Newsletter =
            serde_json::from_value(json!({ "email": "not-an-email", "consent": true }))
                .expect("deserialize");
        let errors = sub.validate().expect_err("must fail");
        assert!(errors.field_errors().contains_key("email"));
    }
}
