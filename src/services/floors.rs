use crate::domain::auth::AuthenticatedUser;
use crate::domain::floor::Floor;
use crate::forms::floor::{AddFloorForm, EditFloorForm};
use crate::policy::{Action, Resource};
use crate::repository::{FloorReader, FloorWriter};
use crate::services::{ServiceError, ServiceResult, ensure};

/// List every floor in display order.
pub fn list_floors<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<Floor>>
where
    R: FloorReader + ?Sized,
{
    ensure(user, Action::List, Resource::Floors)?;

    repo.list_floors().map_err(Into::into)
}

pub fn get_floor<R>(repo: &R, user: &AuthenticatedUser, floor_id: i32) -> ServiceResult<Floor>
where
    R: FloorReader + ?Sized,
{
    ensure(user, Action::Retrieve, Resource::Floors)?;

    repo.get_floor_by_id(floor_id)?.ok_or(ServiceError::NotFound)
}

pub fn create_floor<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddFloorForm,
) -> ServiceResult<Floor>
where
    R: FloorWriter + ?Sized,
{
    ensure(user, Action::Create, Resource::Floors)?;

    let new_floor = form.into_new_floor()?;
    repo.create_floor(&new_floor).map_err(Into::into)
}

pub fn modify_floor<R>(
    repo: &R,
    user: &AuthenticatedUser,
    floor_id: i32,
    form: EditFloorForm,
) -> ServiceResult<Floor>
where
    R: FloorWriter + ?Sized,
{
    ensure(user, Action::Update, Resource::Floors)?;

    let update = form.into_update_floor()?;
    repo.update_floor(floor_id, &update).map_err(Into::into)
}

/// Delete a floor. Its tables survive, detached.
pub fn remove_floor<R>(repo: &R, user: &AuthenticatedUser, floor_id: i32) -> ServiceResult<()>
where
    R: FloorWriter + ?Sized,
{
    ensure(user, Action::Delete, Resource::Floors)?;

    repo.delete_floor(floor_id).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::repository::mock::{MockFloorReader, MockFloorWriter};

    fn admin() -> AuthenticatedUser {
        AuthenticatedUser {
            id: 1,
            email: "boss@example.com".to_string(),
            name: "Boss".to_string(),
            is_admin: true,
        }
    }

    fn employee() -> AuthenticatedUser {
        AuthenticatedUser {
            id: 7,
            email: "waiter@example.com".to_string(),
            name: "Waiter".to_string(),
            is_admin: false,
        }
    }

    #[test]
    fn list_floors_requires_admin() {
        let repo = MockFloorReader::new();

        let result = list_floors(&repo, &employee());

        assert!(matches!(result, Err(ServiceError::Forbidden)));
    }

    #[test]
    fn create_floor_persists_sanitized_name() {
        let mut repo = MockFloorWriter::new();

        repo.expect_create_floor()
            .times(1)
            .withf(|new_floor| {
                assert_eq!(new_floor.name, "Terraza");
                assert_eq!(new_floor.position, 1);
                true
            })
            .returning(|new_floor| {
                Ok(Floor {
                    id: 5,
                    name: new_floor.name.clone(),
                    position: new_floor.position,
                })
            });

        let form = AddFloorForm {
            name: "  Terraza ".to_string(),
            position: 1,
        };

        let created = create_floor(&repo, &admin(), form).expect("expected success");

        assert_eq!(created.id, 5);
        assert_eq!(created.name, "Terraza");
    }

    #[test]
    fn get_floor_maps_missing_to_not_found() {
        let mut repo = MockFloorReader::new();

        repo.expect_get_floor_by_id().return_once(|_| Ok(None));

        let result = get_floor(&repo, &admin(), 99);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
