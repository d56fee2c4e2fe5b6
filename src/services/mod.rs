pub use errors::{ServiceError, ServiceResult};

use crate::domain::auth::AuthenticatedUser;
use crate::policy::{Action, Resource, is_allowed};

pub mod auth;
pub mod dishes;
pub mod employees;
pub mod errors;
pub mod floors;
pub mod incidents;
pub mod orders;
pub mod pages;
pub mod reservations;
pub mod tables;

/// Consult the authorization matrix, turning a denial into the error
/// every service reports for it.
pub(crate) fn ensure(
    user: &AuthenticatedUser,
    action: Action,
    resource: Resource,
) -> ServiceResult<()> {
    if is_allowed(user, action, resource) {
        Ok(())
    } else {
        Err(ServiceError::Forbidden)
    }
}

/// Number of pages needed for `total` items at `per_page`.
pub(crate) fn total_pages(total: usize, per_page: usize) -> usize {
    if per_page == 0 { 0 } else { total.div_ceil(per_page) }
}
