use diesel::prelude::*;

use crate::{
    domain::dish::{
        Dish as DomainDish, DishListQuery, NewDish as DomainNewDish,
        UpdateDish as DomainUpdateDish,
    },
    models::dish::{Dish as DbDish, NewDish as DbNewDish, UpdateDish as DbUpdateDish},
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, DishReader, DishWriter},
};

impl DishReader for DieselRepository {
    fn get_dish_by_id(&self, id: i32) -> RepositoryResult<Option<DomainDish>> {
        use crate::schema::dishes;

        let mut conn = self.conn()?;
        let dish = dishes::table
            .filter(dishes::id.eq(id))
            .first::<DbDish>(&mut conn)
            .optional()?;

        Ok(dish.map(Into::into))
    }

    fn list_dishes(&self, query: DishListQuery) -> RepositoryResult<(usize, Vec<DomainDish>)> {
        use crate::schema::dishes;

        let mut conn = self.conn()?;

        let category_filter: Option<&'static str> = query.category.map(Into::into);
        let search_pattern = query.search.as_ref().map(|term| format!("%{term}%"));

        let mut count_query = dishes::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(category) = category_filter {
            count_query = count_query.filter(dishes::category.eq(category));
        }
        if let Some(ref pattern) = search_pattern {
            count_query = count_query.filter(
                dishes::name
                    .like(pattern.clone())
                    .or(dishes::description.like(pattern.clone())),
            );
        }
        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = dishes::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(category) = category_filter {
            items = items.filter(dishes::category.eq(category));
        }
        if let Some(ref pattern) = search_pattern {
            items = items.filter(
                dishes::name
                    .like(pattern.clone())
                    .or(dishes::description.like(pattern.clone())),
            );
        }

        items = items.order((dishes::category.asc(), dishes::name.asc()));

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let rows = items.load::<DbDish>(&mut conn)?;

        Ok((total, rows.into_iter().map(Into::into).collect()))
    }
}

impl DishWriter for DieselRepository {
    fn create_dish(&self, new_dish: &DomainNewDish) -> RepositoryResult<DomainDish> {
        use crate::schema::dishes;

        let mut conn = self.conn()?;
        let db_new = DbNewDish::from(new_dish);

        let created = diesel::insert_into(dishes::table)
            .values(&db_new)
            .get_result::<DbDish>(&mut conn)?;

        Ok(created.into())
    }

    fn update_dish(&self, dish_id: i32, updates: &DomainUpdateDish) -> RepositoryResult<DomainDish> {
        use crate::schema::dishes;

        let mut conn = self.conn()?;

        if updates.name.is_none()
            && updates.description.is_none()
            && updates.price.is_none()
            && updates.category.is_none()
            && updates.image.is_none()
        {
            return dishes::table
                .filter(dishes::id.eq(dish_id))
                .first::<DbDish>(&mut conn)
                .map(Into::into)
                .map_err(Into::into);
        }

        let db_updates = DbUpdateDish::from(updates);
        let updated = diesel::update(dishes::table.filter(dishes::id.eq(dish_id)))
            .set(&db_updates)
            .get_result::<DbDish>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_dish(&self, dish_id: i32) -> RepositoryResult<()> {
        use crate::schema::dishes;

        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(dishes::table.filter(dishes::id.eq(dish_id))).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
