use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// A staff account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new account. The password is already
/// hashed by the time it reaches the repository.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub is_admin: bool,
}

impl NewUser {
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into().to_lowercase(),
            name: name.into(),
            password_hash: password_hash.into(),
            is_admin: false,
        }
    }

    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }
}

/// Identity details attached to a staff account, one per account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub id: i32,
    pub user_id: i32,
    pub national_id: String,
    pub birth_date: NaiveDate,
    pub nationality: String,
}

/// Payload used to insert or replace a profile for an account.
#[derive(Debug, Clone)]
pub struct NewEmployeeProfile {
    pub national_id: String,
    pub birth_date: NaiveDate,
    pub nationality: String,
}

impl NewEmployeeProfile {
    pub fn new(
        national_id: impl Into<String>,
        birth_date: NaiveDate,
        nationality: impl Into<String>,
    ) -> Self {
        Self {
            national_id: national_id.into(),
            birth_date,
            nationality: nationality.into(),
        }
    }
}

/// Directory entry: an account together with its optional profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub user: User,
    pub profile: Option<EmployeeProfile>,
}

/// Payload required to register an employee.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub user: NewUser,
    pub profile: Option<NewEmployeeProfile>,
}

impl NewEmployee {
    pub fn new(user: NewUser) -> Self {
        Self {
            user,
            profile: None,
        }
    }

    pub fn with_profile(mut self, profile: NewEmployeeProfile) -> Self {
        self.profile = Some(profile);
        self
    }
}

/// Patch data applied when updating an employee. A supplied profile
/// replaces the existing one wholesale.
#[derive(Debug, Clone, Default)]
pub struct UpdateEmployee {
    pub name: Option<String>,
    pub is_admin: Option<bool>,
    pub profile: Option<NewEmployeeProfile>,
}

impl UpdateEmployee {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = Some(is_admin);
        self
    }

    pub fn profile(mut self, profile: NewEmployeeProfile) -> Self {
        self.profile = Some(profile);
        self
    }
}

/// Query definition used to list the employee directory.
#[derive(Debug, Clone, Default)]
pub struct UserListQuery {
    /// Matches the name or email.
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl UserListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
