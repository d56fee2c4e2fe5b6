use serde::Deserialize;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::reservation::{Reservation, ReservationListQuery};
use crate::forms::reservation::{AddReservationForm, EditReservationForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::policy::{Action, Resource};
use crate::repository::{ReservationReader, ReservationWriter};
use crate::services::{ServiceError, ServiceResult, ensure, total_pages};

/// Query string accepted by the reservation list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ReservationListParams {
    #[serde(default)]
    pub mesa: Option<i32>,
    #[serde(default)]
    pub page: Option<usize>,
}

pub fn list_reservations<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: ReservationListParams,
) -> ServiceResult<Paginated<Reservation>>
where
    R: ReservationReader + ?Sized,
{
    ensure(user, Action::List, Resource::Reservations)?;

    let page = params.page.unwrap_or(1).max(1);
    let mut query = ReservationListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(table_id) = params.mesa {
        query = query.table_id(table_id);
    }

    let (total, reservations) = repo.list_reservations(query)?;

    Ok(Paginated::new(
        reservations,
        page,
        total_pages(total, DEFAULT_ITEMS_PER_PAGE),
    ))
}

pub fn get_reservation<R>(
    repo: &R,
    user: &AuthenticatedUser,
    reservation_id: i32,
) -> ServiceResult<Reservation>
where
    R: ReservationReader + ?Sized,
{
    ensure(user, Action::Retrieve, Resource::Reservations)?;

    repo.get_reservation_by_id(reservation_id)?
        .ok_or(ServiceError::NotFound)
}

/// Book a table. The table is marked `Reserved` whatever state it was
/// in; front-of-house staff resolve double bookings by hand.
pub fn create_reservation<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddReservationForm,
) -> ServiceResult<Reservation>
where
    R: ReservationWriter + ?Sized,
{
    ensure(user, Action::Create, Resource::Reservations)?;

    let new_reservation = form.into_new_reservation()?;
    repo.create_reservation(&new_reservation).map_err(Into::into)
}

pub fn modify_reservation<R>(
    repo: &R,
    user: &AuthenticatedUser,
    reservation_id: i32,
    form: EditReservationForm,
) -> ServiceResult<Reservation>
where
    R: ReservationWriter + ?Sized,
{
    ensure(user, Action::Update, Resource::Reservations)?;

    let update = form.into_update_reservation()?;
    repo.update_reservation(reservation_id, &update)
        .map_err(Into::into)
}

/// Cancel a reservation, freeing its table.
pub fn remove_reservation<R>(
    repo: &R,
    user: &AuthenticatedUser,
    reservation_id: i32,
) -> ServiceResult<()>
where
    R: ReservationWriter + ?Sized,
{
    ensure(user, Action::Delete, Resource::Reservations)?;

    repo.delete_reservation(reservation_id).map_err(Into::into)
}
