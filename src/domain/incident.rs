use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Kind of staff-reported incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentCategory {
    Complaint,
    Suggestion,
}

impl From<&str> for IncidentCategory {
    fn from(value: &str) -> Self {
        match value {
            "Suggestion" => Self::Suggestion,
            _ => Self::Complaint,
        }
    }
}

impl From<IncidentCategory> for &'static str {
    fn from(value: IncidentCategory) -> Self {
        match value {
            IncidentCategory::Complaint => "Complaint",
            IncidentCategory::Suggestion => "Suggestion",
        }
    }
}

impl std::fmt::Display for IncidentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(<&str>::from(*self))
    }
}

/// A logged complaint or suggestion, independent of any table or order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub id: i32,
    pub category: IncidentCategory,
    pub message: String,
    pub seen: bool,
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new incident.
#[derive(Debug, Clone)]
pub struct NewIncident {
    pub category: IncidentCategory,
    pub message: String,
}

impl NewIncident {
    pub fn new(category: IncidentCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

/// Patch data applied when updating an existing incident.
#[derive(Debug, Clone, Default)]
pub struct UpdateIncident {
    pub category: Option<IncidentCategory>,
    pub message: Option<String>,
}

impl UpdateIncident {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: IncidentCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Query definition used to list incidents.
#[derive(Debug, Clone, Default)]
pub struct IncidentListQuery {
    pub seen: Option<bool>,
    pub pagination: Option<Pagination>,
}

impl IncidentListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seen(mut self, seen: bool) -> Self {
        self.seen = Some(seen);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
