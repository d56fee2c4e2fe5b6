use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::reservation::{NewReservation, UpdateReservation};
use crate::forms::{
    FormError, FormResult, sanitize_inline_text, sanitize_multiline_text, sanitize_optional_text,
};

const NAME_MAX_LEN: u64 = 128;
const NOTES_MAX_LEN: u64 = 2048;

/// Payload for booking a table.
#[derive(Debug, Deserialize, Validate)]
pub struct AddReservationForm {
    #[validate(range(min = 1))]
    pub table_id: i32,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub client_name: String,
    pub reserved_for: NaiveDateTime,
    #[validate(range(min = 1))]
    pub party_size: i32,
    #[validate(length(max = NOTES_MAX_LEN))]
    #[serde(default)]
    pub notes: Option<String>,
}

impl AddReservationForm {
    pub fn into_new_reservation(self) -> FormResult<NewReservation> {
        self.validate()?;

        let client_name = sanitize_inline_text(&self.client_name);
        if client_name.is_empty() {
            return Err(FormError::EmptyField("client name"));
        }

        let mut new_reservation =
            NewReservation::new(self.table_id, client_name, self.reserved_for, self.party_size);
        if let Some(notes) = sanitize_optional_text(self.notes.as_deref()) {
            new_reservation = new_reservation.with_notes(notes);
        }

        Ok(new_reservation)
    }
}

/// Patch payload for a reservation. Blank notes clear the stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct EditReservationForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub reserved_for: Option<NaiveDateTime>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub party_size: Option<i32>,
    #[validate(length(max = NOTES_MAX_LEN))]
    #[serde(default)]
    pub notes: Option<String>,
}

impl EditReservationForm {
    pub fn into_update_reservation(self) -> FormResult<UpdateReservation> {
        self.validate()?;

        let mut update = UpdateReservation::new();

        if let Some(client_name) = self.client_name.as_deref() {
            let client_name = sanitize_inline_text(client_name);
            if client_name.is_empty() {
                return Err(FormError::EmptyField("client name"));
            }
            update = update.client_name(client_name);
        }
        if let Some(reserved_for) = self.reserved_for {
            update = update.reserved_for(reserved_for);
        }
        if let Some(party_size) = self.party_size {
            update = update.party_size(party_size);
        }
        if let Some(notes) = self.notes.as_deref() {
            let notes = sanitize_multiline_text(notes);
            update = update.notes((!notes.is_empty()).then_some(notes));
        }

        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 9, 18)
            .and_then(|date| date.and_hms_opt(21, 0, 0))
            .unwrap_or_default()
    }

    #[test]
    fn add_reservation_form_converts() {
        let form = AddReservationForm {
            table_id: 4,
            client_name: "  Sra.  Rojas ".to_string(),
            reserved_for: sample_datetime(),
            party_size: 6,
            notes: Some(" cumpleaños ".to_string()),
        };

        let reservation = form.into_new_reservation().expect("expected conversion");

        assert_eq!(reservation.table_id, 4);
        assert_eq!(reservation.client_name, "Sra. Rojas");
        assert_eq!(reservation.party_size, 6);
        assert_eq!(reservation.notes.as_deref(), Some("cumpleaños"));
    }

    #[test]
    fn add_reservation_form_rejects_empty_party() {
        let form = AddReservationForm {
            table_id: 4,
            client_name: "Rojas".to_string(),
            reserved_for: sample_datetime(),
            party_size: 0,
            notes: None,
        };

        assert!(matches!(
            form.into_new_reservation(),
            Err(FormError::Validation(_))
        ));
    }
}
