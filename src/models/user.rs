use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::user::{
    EmployeeProfile as DomainEmployeeProfile, NewEmployeeProfile as DomainNewEmployeeProfile,
    NewUser as DomainNewUser, User as DomainUser,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::employee_profiles)]
#[diesel(belongs_to(User, foreign_key = user_id))]
pub struct EmployeeProfile {
    pub id: i32,
    pub user_id: i32,
    pub national_id: String,
    pub birth_date: NaiveDate,
    pub nationality: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub name: &'a str,
    pub password_hash: &'a str,
    pub is_admin: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::employee_profiles)]
pub struct NewEmployeeProfile<'a> {
    pub user_id: i32,
    pub national_id: &'a str,
    pub birth_date: NaiveDate,
    pub nationality: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::users)]
pub struct UpdateUser<'a> {
    pub name: Option<&'a str>,
    pub is_admin: Option<bool>,
}

impl From<User> for DomainUser {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            email: value.email,
            name: value.name,
            password_hash: value.password_hash,
            is_admin: value.is_admin,
            created_at: value.created_at,
        }
    }
}

impl From<EmployeeProfile> for DomainEmployeeProfile {
    fn from(value: EmployeeProfile) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            national_id: value.national_id,
            birth_date: value.birth_date,
            nationality: value.nationality,
        }
    }
}

impl<'a> From<&'a DomainNewUser> for NewUser<'a> {
    fn from(value: &'a DomainNewUser) -> Self {
        Self {
            email: value.email.as_str(),
            name: value.name.as_str(),
            password_hash: value.password_hash.as_str(),
            is_admin: value.is_admin,
        }
    }
}

impl<'a> NewEmployeeProfile<'a> {
    pub fn from_domain(user_id: i32, value: &'a DomainNewEmployeeProfile) -> Self {
        Self {
            user_id,
            national_id: value.national_id.as_str(),
            birth_date: value.birth_date,
            nationality: value.nationality.as_str(),
        }
    }
}
