use serde::Deserialize;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::incident::{Incident, IncidentListQuery};
use crate::forms::incident::{AddIncidentForm, EditIncidentForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::policy::{Action, Resource};
use crate::repository::{IncidentReader, IncidentWriter};
use crate::services::{ServiceError, ServiceResult, ensure, total_pages};

/// Query string accepted by the incident list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct IncidentListParams {
    #[serde(default)]
    pub visto: Option<bool>,
    #[serde(default)]
    pub page: Option<usize>,
}

pub fn list_incidents<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: IncidentListParams,
) -> ServiceResult<Paginated<Incident>>
where
    R: IncidentReader + ?Sized,
{
    ensure(user, Action::List, Resource::Incidents)?;

    let page = params.page.unwrap_or(1).max(1);
    let mut query = IncidentListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(seen) = params.visto {
        query = query.seen(seen);
    }

    let (total, incidents) = repo.list_incidents(query)?;

    Ok(Paginated::new(
        incidents,
        page,
        total_pages(total, DEFAULT_ITEMS_PER_PAGE),
    ))
}

pub fn get_incident<R>(
    repo: &R,
    user: &AuthenticatedUser,
    incident_id: i32,
) -> ServiceResult<Incident>
where
    R: IncidentReader + ?Sized,
{
    ensure(user, Action::Retrieve, Resource::Incidents)?;

    repo.get_incident_by_id(incident_id)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_incident<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddIncidentForm,
) -> ServiceResult<Incident>
where
    R: IncidentWriter + ?Sized,
{
    ensure(user, Action::Create, Resource::Incidents)?;

    let new_incident = form.into_new_incident()?;
    repo.create_incident(&new_incident).map_err(Into::into)
}

pub fn modify_incident<R>(
    repo: &R,
    user: &AuthenticatedUser,
    incident_id: i32,
    form: EditIncidentForm,
) -> ServiceResult<Incident>
where
    R: IncidentWriter + ?Sized,
{
    ensure(user, Action::Update, Resource::Incidents)?;

    let update = form.into_update_incident()?;
    repo.update_incident(incident_id, &update).map_err(Into::into)
}

pub fn remove_incident<R>(
    repo: &R,
    user: &AuthenticatedUser,
    incident_id: i32,
) -> ServiceResult<()>
where
    R: IncidentWriter + ?Sized,
{
    ensure(user, Action::Delete, Resource::Incidents)?;

    repo.delete_incident(incident_id).map_err(Into::into)
}

/// Acknowledge an incident. Any authenticated staff member may do it.
pub fn mark_incident_seen<R>(
    repo: &R,
    user: &AuthenticatedUser,
    incident_id: i32,
) -> ServiceResult<Incident>
where
    R: IncidentWriter + ?Sized,
{
    ensure(user, Action::MarkSeen, Resource::Incidents)?;

    repo.mark_seen(incident_id).map_err(Into::into)
}
