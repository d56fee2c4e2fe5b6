//! Static action/resource authorization matrix.
//!
//! Every service entry point asks this module for an allow/deny decision
//! before touching the repository. There are only two roles: admins
//! (`is_admin` on the account) and regular authenticated employees.

use crate::domain::auth::AuthenticatedUser;

/// Actions a caller may attempt against a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Retrieve,
    Create,
    Update,
    Delete,
    /// Open a tab on a free table.
    StartOrder,
    /// Force a table to `Free` or `Maintenance`.
    SetTableState,
    /// Add or remove a line on an open order.
    EditLines,
    /// Close an open order.
    Finalize,
    /// Flag an incident as reviewed.
    MarkSeen,
}

/// Resources covered by the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Floors,
    Tables,
    Dishes,
    Orders,
    Reservations,
    Incidents,
    Employees,
}

/// Decide whether `user` may perform `action` on `resource`.
pub fn is_allowed(user: &AuthenticatedUser, action: Action, resource: Resource) -> bool {
    use Action::*;
    use Resource::*;

    if user.is_admin {
        return true;
    }

    match (resource, action) {
        // Waiters see the room and run tabs.
        (Tables, List | Retrieve | StartOrder) => true,
        (Dishes, List | Retrieve) => true,
        (Orders, List | Retrieve | EditLines | Finalize) => true,
        // Anyone on staff may read incidents and acknowledge them;
        // only admins file, edit or remove them.
        (Incidents, List | Retrieve | MarkSeen) => true,
        _ => false,
    }
}
