use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::user::{NewEmployee, NewEmployeeProfile, NewUser, UpdateEmployee};
use crate::forms::{FormError, FormResult, sanitize_inline_text, validate_submitted_email};

const NAME_MAX_LEN: u64 = 128;
const PASSWORD_MIN_LEN: u64 = 8;

/// Payload for registering a staff account, optionally with its
/// identity profile. The password arrives in the clear and is hashed
/// by the service.
#[derive(Debug, Deserialize, Validate)]
pub struct AddEmployeeForm {
    #[validate(custom(function = validate_submitted_email))]
    pub email: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(min = PASSWORD_MIN_LEN))]
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub national_id: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub nationality: Option<String>,
}

/// The validated account data plus the plain password left for the
/// service to hash.
#[derive(Debug)]
pub struct AddEmployeePayload {
    pub email: String,
    pub name: String,
    pub password: String,
    pub is_admin: bool,
    pub profile: Option<NewEmployeeProfile>,
}

impl AddEmployeeForm {
    pub fn into_payload(self) -> FormResult<AddEmployeePayload> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(FormError::EmptyField("employee name"));
        }

        let profile = build_profile(
            self.national_id.as_deref(),
            self.birth_date,
            self.nationality.as_deref(),
        )?;

        Ok(AddEmployeePayload {
            email: self.email.trim().to_lowercase(),
            name,
            password: self.password,
            is_admin: self.is_admin,
            profile,
        })
    }
}

impl AddEmployeePayload {
    /// Assemble the domain payload once the password has been hashed.
    pub fn into_new_employee(self, password_hash: String) -> NewEmployee {
        let mut user = NewUser::new(self.email, self.name, password_hash);
        if self.is_admin {
            user = user.admin();
        }

        let mut employee = NewEmployee::new(user);
        if let Some(profile) = self.profile {
            employee = employee.with_profile(profile);
        }
        employee
    }
}

/// Patch payload for an employee. Supplying any profile field requires
/// supplying all of them; the profile is replaced wholesale.
#[derive(Debug, Deserialize, Validate)]
pub struct EditEmployeeForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default)]
    pub national_id: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub nationality: Option<String>,
}

impl EditEmployeeForm {
    pub fn into_update_employee(self) -> FormResult<UpdateEmployee> {
        self.validate()?;

        let mut update = UpdateEmployee::new();

        if let Some(name) = self.name.as_deref() {
            let name = sanitize_inline_text(name);
            if name.is_empty() {
                return Err(FormError::EmptyField("employee name"));
            }
            update = update.name(name);
        }
        if let Some(is_admin) = self.is_admin {
            update = update.is_admin(is_admin);
        }
        if let Some(profile) = build_profile(
            self.national_id.as_deref(),
            self.birth_date,
            self.nationality.as_deref(),
        )? {
            update = update.profile(profile);
        }

        Ok(update)
    }
}

fn build_profile(
    national_id: Option<&str>,
    birth_date: Option<NaiveDate>,
    nationality: Option<&str>,
) -> FormResult<Option<NewEmployeeProfile>> {
    let national_id = national_id
        .map(sanitize_inline_text)
        .filter(|value| !value.is_empty());
    let nationality = nationality
        .map(sanitize_inline_text)
        .filter(|value| !value.is_empty());

    match (national_id, birth_date, nationality) {
        (None, None, None) => Ok(None),
        (Some(national_id), Some(birth_date), Some(nationality)) => {
            Ok(Some(NewEmployeeProfile::new(
                national_id,
                birth_date,
                nationality,
            )))
        }
        _ => Err(FormError::EmptyField(
            "profile (national id, birth date and nationality go together)",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_employee_form_builds_payload_with_profile() {
        let form = AddEmployeeForm {
            email: " Garzon@Example.com ".to_string(),
            name: " Pedro  Pérez ".to_string(),
            password: "correcthorse".to_string(),
            is_admin: false,
            national_id: Some(" 12.345.678-9 ".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12),
            nationality: Some("Chilena".to_string()),
        };

        let payload = form.into_payload().expect("expected conversion");

        assert_eq!(payload.email, "garzon@example.com");
        assert_eq!(payload.name, "Pedro Pérez");
        let profile = payload.profile.as_ref().expect("profile present");
        assert_eq!(profile.national_id, "12.345.678-9");

        let employee = payload.into_new_employee("$argon2$hash".to_string());
        assert_eq!(employee.user.password_hash, "$argon2$hash");
        assert!(!employee.user.is_admin);
    }

    #[test]
    fn add_employee_form_rejects_partial_profile() {
        let form = AddEmployeeForm {
            email: "garzon@example.com".to_string(),
            name: "Pedro".to_string(),
            password: "correcthorse".to_string(),
            is_admin: false,
            national_id: Some("12.345.678-9".to_string()),
            birth_date: None,
            nationality: None,
        };

        assert!(matches!(form.into_payload(), Err(FormError::EmptyField(_))));
    }

    #[test]
    fn add_employee_form_rejects_short_password() {
        let form = AddEmployeeForm {
            email: "garzon@example.com".to_string(),
            name: "Pedro".to_string(),
            password: "abc".to_string(),
            is_admin: false,
            national_id: None,
            birth_date: None,
            nationality: None,
        };

        assert!(matches!(form.into_payload(), Err(FormError::Validation(_))));
    }
}
