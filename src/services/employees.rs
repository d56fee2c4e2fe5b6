use serde::Deserialize;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::user::{Employee, UserListQuery};
use crate::forms::employee::{AddEmployeeForm, EditEmployeeForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::policy::{Action, Resource};
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult, auth, ensure, total_pages};

/// Query string accepted by the employee directory endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct EmployeeListParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
}

pub fn list_employees<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: EmployeeListParams,
) -> ServiceResult<Paginated<Employee>>
where
    R: UserReader + ?Sized,
{
    ensure(user, Action::List, Resource::Employees)?;

    let page = params.page.unwrap_or(1).max(1);
    let mut query = UserListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(search) = params.search.as_deref().map(str::trim)
        && !search.is_empty()
    {
        query = query.search(search);
    }

    let (total, employees) = repo.list_employees(query)?;

    Ok(Paginated::new(
        employees,
        page,
        total_pages(total, DEFAULT_ITEMS_PER_PAGE),
    ))
}

pub fn get_employee<R>(repo: &R, user: &AuthenticatedUser, user_id: i32) -> ServiceResult<Employee>
where
    R: UserReader + ?Sized,
{
    ensure(user, Action::Retrieve, Resource::Employees)?;

    let account = repo.get_user_by_id(user_id)?.ok_or(ServiceError::NotFound)?;

    // The directory join is the cheapest way to pick up the profile.
    let (_, employees) = repo.list_employees(UserListQuery::new().search(account.email.clone()))?;

    Ok(employees
        .into_iter()
        .find(|employee| employee.user.id == user_id)
        .unwrap_or(Employee {
            user: account,
            profile: None,
        }))
}

/// Register a staff account, hashing the submitted password.
pub fn create_employee<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddEmployeeForm,
) -> ServiceResult<Employee>
where
    R: UserWriter + ?Sized,
{
    ensure(user, Action::Create, Resource::Employees)?;

    let payload = form.into_payload()?;
    let password_hash = auth::hash_password(&payload.password)?;
    let new_employee = payload.into_new_employee(password_hash);

    repo.create_employee(&new_employee).map_err(Into::into)
}

pub fn modify_employee<R>(
    repo: &R,
    user: &AuthenticatedUser,
    user_id: i32,
    form: EditEmployeeForm,
) -> ServiceResult<Employee>
where
    R: UserWriter + ?Sized,
{
    ensure(user, Action::Update, Resource::Employees)?;

    let update = form.into_update_employee()?;
    repo.update_employee(user_id, &update).map_err(Into::into)
}

pub fn remove_employee<R>(repo: &R, user: &AuthenticatedUser, user_id: i32) -> ServiceResult<()>
where
    R: UserWriter + ?Sized,
{
    ensure(user, Action::Delete, Resource::Employees)?;

    // Admins cannot delete their own account from the directory.
    if user.id == user_id {
        return Err(ServiceError::Conflict(
            "cannot delete the logged-in account".to_string(),
        ));
    }

    repo.delete_user(user_id).map_err(Into::into)
}
