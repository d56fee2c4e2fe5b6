use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    domain::user::{
        Employee as DomainEmployee, NewEmployee as DomainNewEmployee,
        UpdateEmployee as DomainUpdateEmployee, User as DomainUser, UserListQuery,
    },
    models::user::{
        EmployeeProfile as DbEmployeeProfile, NewEmployeeProfile as DbNewEmployeeProfile,
        NewUser as DbNewUser, UpdateUser as DbUpdateUser, User as DbUser,
    },
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, UserReader, UserWriter},
};

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<DomainUser>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::id.eq(id))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }

    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<DomainUser>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::email.eq(email.to_lowercase()))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }

    fn list_employees(
        &self,
        query: UserListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainEmployee>)> {
        use crate::schema::{employee_profiles, users};

        let mut conn = self.conn()?;

        let search_pattern = query.search.as_ref().map(|term| format!("%{term}%"));

        let mut count_query = users::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(ref pattern) = search_pattern {
            count_query = count_query.filter(
                users::name
                    .like(pattern.clone())
                    .or(users::email.like(pattern.clone())),
            );
        }
        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = users::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(ref pattern) = search_pattern {
            items = items.filter(
                users::name
                    .like(pattern.clone())
                    .or(users::email.like(pattern.clone())),
            );
        }

        items = items.order(users::name.asc());

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let db_users = items.load::<DbUser>(&mut conn)?;
        if db_users.is_empty() {
            return Ok((total, Vec::new()));
        }

        let user_ids: Vec<i32> = db_users.iter().map(|user| user.id).collect();
        let profiles = employee_profiles::table
            .filter(employee_profiles::user_id.eq_any(&user_ids))
            .load::<DbEmployeeProfile>(&mut conn)?;

        let mut profile_by_user: HashMap<i32, DbEmployeeProfile> = profiles
            .into_iter()
            .map(|profile| (profile.user_id, profile))
            .collect();

        let employees = db_users
            .into_iter()
            .map(|user| {
                let profile = profile_by_user.remove(&user.id);
                DomainEmployee {
                    user: user.into(),
                    profile: profile.map(Into::into),
                }
            })
            .collect();

        Ok((total, employees))
    }
}

impl UserWriter for DieselRepository {
    fn create_employee(&self, new_employee: &DomainNewEmployee) -> RepositoryResult<DomainEmployee> {
        use crate::schema::{employee_profiles, users};

        let mut conn = self.conn()?;

        conn.transaction::<DomainEmployee, RepositoryError, _>(|conn| {
            let db_new = DbNewUser::from(&new_employee.user);
            let created = diesel::insert_into(users::table)
                .values(&db_new)
                .get_result::<DbUser>(conn)?;

            let profile = match new_employee.profile.as_ref() {
                Some(profile) => Some(
                    diesel::insert_into(employee_profiles::table)
                        .values(&DbNewEmployeeProfile::from_domain(created.id, profile))
                        .get_result::<DbEmployeeProfile>(conn)?,
                ),
                None => None,
            };

            Ok(DomainEmployee {
                user: created.into(),
                profile: profile.map(Into::into),
            })
        })
    }

    fn update_employee(
        &self,
        user_id: i32,
        updates: &DomainUpdateEmployee,
    ) -> RepositoryResult<DomainEmployee> {
        use crate::schema::{employee_profiles, users};

        let mut conn = self.conn()?;

        conn.transaction::<DomainEmployee, RepositoryError, _>(|conn| {
            let updated = if updates.name.is_some() || updates.is_admin.is_some() {
                diesel::update(users::table.filter(users::id.eq(user_id)))
                    .set(&DbUpdateUser {
                        name: updates.name.as_deref(),
                        is_admin: updates.is_admin,
                    })
                    .get_result::<DbUser>(conn)
                    .optional()?
                    .ok_or(RepositoryError::NotFound)?
            } else {
                users::table
                    .filter(users::id.eq(user_id))
                    .first::<DbUser>(conn)
                    .optional()?
                    .ok_or(RepositoryError::NotFound)?
            };

            if let Some(profile) = updates.profile.as_ref() {
                // Replace wholesale; one profile per account.
                diesel::delete(
                    employee_profiles::table.filter(employee_profiles::user_id.eq(user_id)),
                )
                .execute(conn)?;
                diesel::insert_into(employee_profiles::table)
                    .values(&DbNewEmployeeProfile::from_domain(user_id, profile))
                    .execute(conn)?;
            }

            let profile = employee_profiles::table
                .filter(employee_profiles::user_id.eq(user_id))
                .first::<DbEmployeeProfile>(conn)
                .optional()?;

            Ok(DomainEmployee {
                user: updated.into(),
                profile: profile.map(Into::into),
            })
        })
    }

    fn delete_user(&self, user_id: i32) -> RepositoryResult<()> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(users::table.filter(users::id.eq(user_id))).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
