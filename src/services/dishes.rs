use serde::Deserialize;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dish::{Dish, DishCategory, DishListQuery};
use crate::forms::dish::{AddDishForm, EditDishForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::policy::{Action, Resource};
use crate::repository::{DishReader, DishWriter};
use crate::services::{ServiceError, ServiceResult, ensure, total_pages};

/// Query string accepted by the menu list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct DishListParams {
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
}

impl DishListParams {
    fn into_query(self) -> (DishListQuery, usize) {
        let page = self.page.unwrap_or(1).max(1);

        let mut query = DishListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
        if let Some(category) = self.categoria.as_deref() {
            query = query.category(DishCategory::from(category));
        }
        if let Some(search) = self.search.as_deref().map(str::trim)
            && !search.is_empty()
        {
            query = query.search(search);
        }

        (query, page)
    }
}

pub fn list_dishes<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: DishListParams,
) -> ServiceResult<Paginated<Dish>>
where
    R: DishReader + ?Sized,
{
    ensure(user, Action::List, Resource::Dishes)?;

    let (query, page) = params.into_query();
    let (total, dishes) = repo.list_dishes(query)?;

    Ok(Paginated::new(
        dishes,
        page,
        total_pages(total, DEFAULT_ITEMS_PER_PAGE),
    ))
}

pub fn get_dish<R>(repo: &R, user: &AuthenticatedUser, dish_id: i32) -> ServiceResult<Dish>
where
    R: DishReader + ?Sized,
{
    ensure(user, Action::Retrieve, Resource::Dishes)?;

    repo.get_dish_by_id(dish_id)?.ok_or(ServiceError::NotFound)
}

pub fn create_dish<R>(repo: &R, user: &AuthenticatedUser, form: AddDishForm) -> ServiceResult<Dish>
where
    R: DishWriter + ?Sized,
{
    ensure(user, Action::Create, Resource::Dishes)?;

    let new_dish = form.into_new_dish()?;
    repo.create_dish(&new_dish).map_err(Into::into)
}

pub fn modify_dish<R>(
    repo: &R,
    user: &AuthenticatedUser,
    dish_id: i32,
    form: EditDishForm,
) -> ServiceResult<Dish>
where
    R: DishWriter + ?Sized,
{
    ensure(user, Action::Update, Resource::Dishes)?;

    let update = form.into_update_dish()?;
    repo.update_dish(dish_id, &update).map_err(Into::into)
}

pub fn remove_dish<R>(repo: &R, user: &AuthenticatedUser, dish_id: i32) -> ServiceResult<()>
where
    R: DishWriter + ?Sized,
{
    ensure(user, Action::Delete, Resource::Dishes)?;

    repo.delete_dish(dish_id).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::repository::mock::{MockDishReader, MockDishWriter};

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

    fn sample_dish(id: i32, name: &str, price: i32) -> Dish {
        Dish {
            id,
            name: name.to_string(),
            description: None,
            price,
            category: DishCategory::Main,
            image: None,
        }
    }

    #[test]
    fn employees_may_browse_the_menu() {
        let mut repo = MockDishReader::new();

        repo.expect_list_dishes()
            .times(1)
            .withf(|query| {
                assert_eq!(query.category, Some(DishCategory::Drink));
                assert_eq!(query.search.as_deref(), Some("pisco"));
                true
            })
            .returning(|_| Ok((1, vec![sample_dish(2, "Pisco sour", 4500)])));

        let params = DishListParams {
            categoria: Some("Drink".to_string()),
            search: Some(" pisco ".to_string()),
            page: None,
        };

        let result = list_dishes(&repo, &employee(), params).expect("expected success");

        assert_eq!(result.items.len(), 1);
        assert_eq!(result.page, 1);
    }

    #[test]
    fn employees_may_not_edit_the_menu() {
        let repo = MockDishWriter::new();

        let form = AddDishForm {
            name: "Cazuela".to_string(),
            description: None,
            price: 7500,
            category: "Main".to_string(),
            image: None,
        };

        assert!(matches!(
            create_dish(&repo, &employee(), form),
            Err(ServiceError::Forbidden)
        ));
    }

    #[test]
    fn create_dish_persists_converted_form() {
        let mut repo = MockDishWriter::new();

        repo.expect_create_dish()
            .times(1)
            .withf(|new_dish| {
                assert_eq!(new_dish.name, "Cazuela");
                assert_eq!(new_dish.price, 7500);
                true
            })
            .returning(|new_dish| {
                let mut dish = sample_dish(9, &new_dish.name, new_dish.price);
                dish.category = new_dish.category;
                Ok(dish)
            });

        let form = AddDishForm {
            name: " Cazuela ".to_string(),
            description: None,
            price: 7500,
            category: "Main".to_string(),
            image: None,
        };

        let created = create_dish(&repo, &admin(), form).expect("expected success");

        assert_eq!(created.id, 9);
    }
}
