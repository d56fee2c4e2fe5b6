use serde::Deserialize;
use validator::Validate;

use crate::forms::validate_submitted_email;

/// Credentials submitted by the login page.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(custom(function = validate_submitted_email))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl LoginForm {
    /// Email normalized the way accounts are stored.
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_form_normalizes_email() {
        let form = LoginForm {
            email: " Ana@Example.COM ".to_string(),
            password: "secret".to_string(),
        };

        assert!(form.validate().is_ok());
        assert_eq!(form.normalized_email(), "ana@example.com");
    }
}
