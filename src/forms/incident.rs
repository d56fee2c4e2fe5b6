use serde::Deserialize;
use validator::Validate;

use crate::domain::incident::{IncidentCategory, NewIncident, UpdateIncident};
use crate::forms::{FormError, FormResult, sanitize_multiline_text};

const MESSAGE_MAX_LEN: u64 = 4096;

/// Payload for logging a complaint or suggestion.
#[derive(Debug, Deserialize, Validate)]
pub struct AddIncidentForm {
    pub category: String,
    #[validate(length(min = 1, max = MESSAGE_MAX_LEN))]
    pub message: String,
}

impl AddIncidentForm {
    pub fn into_new_incident(self) -> FormResult<NewIncident> {
        self.validate()?;

        let message = sanitize_multiline_text(&self.message);
        if message.is_empty() {
            return Err(FormError::EmptyField("incident message"));
        }

        Ok(NewIncident::new(parse_category(&self.category)?, message))
    }
}

/// Patch payload for an incident.
#[derive(Debug, Deserialize, Validate)]
pub struct EditIncidentForm {
    #[serde(default)]
    pub category: Option<String>,
    #[validate(length(min = 1, max = MESSAGE_MAX_LEN))]
    #[serde(default)]
    pub message: Option<String>,
}

impl EditIncidentForm {
    pub fn into_update_incident(self) -> FormResult<UpdateIncident> {
        self.validate()?;

        let mut update = UpdateIncident::new();

        if let Some(category) = self.category.as_deref() {
            update = update.category(parse_category(category)?);
        }
        if let Some(message) = self.message.as_deref() {
            let message = sanitize_multiline_text(message);
            if message.is_empty() {
                return Err(FormError::EmptyField("incident message"));
            }
            update = update.message(message);
        }

        Ok(update)
    }
}

fn parse_category(value: &str) -> FormResult<IncidentCategory> {
    match value.trim() {
        "Complaint" => Ok(IncidentCategory::Complaint),
        "Suggestion" => Ok(IncidentCategory::Suggestion),
        other => Err(FormError::InvalidValue {
            field: "category",
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_incident_form_converts() {
        let form = AddIncidentForm {
            category: "Suggestion".to_string(),
            message: "  más hielo en la barra  ".to_string(),
        };

        let incident = form.into_new_incident().expect("expected conversion");

        assert_eq!(incident.category, IncidentCategory::Suggestion);
        assert_eq!(incident.message, "más hielo en la barra");
    }

    #[test]
    fn add_incident_form_rejects_unknown_category() {
        let form = AddIncidentForm {
            category: "Elogio".to_string(),
            message: "todo bien".to_string(),
        };

        assert!(matches!(
            form.into_new_incident(),
            Err(FormError::InvalidValue { field: "category", .. })
        ));
    }
}
