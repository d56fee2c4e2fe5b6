use serde::Deserialize;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dining_table::{DiningTable, TableListQuery, TableState};
use crate::domain::order::Order;
use crate::forms::table::{AddTableForm, EditTableForm, SetTableStateForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::policy::{Action, Resource};
use crate::repository::{DiningTableReader, DiningTableWriter, OrderWriter};
use crate::services::{ServiceError, ServiceResult, ensure, total_pages};

/// Query string accepted by the table list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct TableListParams {
    #[serde(default)]
    pub piso: Option<i32>,
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
}

impl TableListParams {
    fn into_query(self) -> (TableListQuery, usize) {
        let page = self.page.unwrap_or(1).max(1);

        let mut query = TableListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
        if let Some(floor_id) = self.piso {
            query = query.floor_id(floor_id);
        }
        if let Some(state) = self.estado.as_deref() {
            query = query.state(TableState::from(state));
        }

        (query, page)
    }
}

pub fn list_tables<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: TableListParams,
) -> ServiceResult<Paginated<DiningTable>>
where
    R: DiningTableReader + ?Sized,
{
    ensure(user, Action::List, Resource::Tables)?;

    let (query, page) = params.into_query();
    let (total, tables) = repo.list_tables(query)?;

    Ok(Paginated::new(
        tables,
        page,
        total_pages(total, DEFAULT_ITEMS_PER_PAGE),
    ))
}

pub fn get_table<R>(repo: &R, user: &AuthenticatedUser, table_id: i32) -> ServiceResult<DiningTable>
where
    R: DiningTableReader + ?Sized,
{
    ensure(user, Action::Retrieve, Resource::Tables)?;

    repo.get_table_by_id(table_id)?.ok_or(ServiceError::NotFound)
}

pub fn create_table<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddTableForm,
) -> ServiceResult<DiningTable>
where
    R: DiningTableWriter + ?Sized,
{
    ensure(user, Action::Create, Resource::Tables)?;

    let new_table = form.into_new_table()?;
    repo.create_table(&new_table).map_err(Into::into)
}

pub fn modify_table<R>(
    repo: &R,
    user: &AuthenticatedUser,
    table_id: i32,
    form: EditTableForm,
) -> ServiceResult<DiningTable>
where
    R: DiningTableWriter + ?Sized,
{
    ensure(user, Action::Update, Resource::Tables)?;

    let update = form.into_update_table()?;
    repo.update_table(table_id, &update).map_err(Into::into)
}

pub fn remove_table<R>(repo: &R, user: &AuthenticatedUser, table_id: i32) -> ServiceResult<()>
where
    R: DiningTableWriter + ?Sized,
{
    ensure(user, Action::Delete, Resource::Tables)?;

    repo.delete_table(table_id).map_err(Into::into)
}

/// Force a table to `Free` or `Maintenance`. The repository rejects
/// other targets and any change while the table is occupied.
pub fn force_table_state<R>(
    repo: &R,
    user: &AuthenticatedUser,
    table_id: i32,
    form: SetTableStateForm,
) -> ServiceResult<DiningTable>
where
    R: DiningTableWriter + ?Sized,
{
    ensure(user, Action::SetTableState, Resource::Tables)?;

    let target = form.into_state()?;
    repo.set_table_state(table_id, target).map_err(Into::into)
}

/// Open a tab on a free table.
pub fn start_table_order<R>(
    repo: &R,
    user: &AuthenticatedUser,
    table_id: i32,
) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    ensure(user, Action::StartOrder, Resource::Tables)?;

    repo.start_order(table_id).map_err(Into::into)
}
