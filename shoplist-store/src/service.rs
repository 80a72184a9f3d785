//! Shopping list operations
//!
//! Each call issues exactly one statement (an empty update issues none) on
//! the executor it is handed: a `&PgPool`, a `&mut PgConnection` or a
//! `&mut Transaction<Postgres>`. Nothing is cached between calls.

use sqlx::PgExecutor;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::models::{CategoryTotal, ItemUpdate, NewItem, Page, ShoppingListItem};
use crate::query::{self, ItemQuery};

/// Stateless facade over the `shopping_list` table
#[derive(Debug, Clone, Copy, Default)]
pub struct ShoppingListService;

impl ShoppingListService {
    /// All rows in insertion order.
    #[instrument(skip_all)]
    pub async fn get_shopping_list<'e, E>(db: E) -> Result<Vec<ShoppingListItem>>
    where
        E: PgExecutor<'e>,
    {
        let mut builder = ItemQuery::new().build();
        let items: Vec<ShoppingListItem> = builder.build_query_as().fetch_all(db).await?;
        debug!(rows = items.len(), "fetched shopping list");
        Ok(items)
    }

    /// The row with `id`, or `None` when there is no such row.
    #[instrument(skip(db))]
    pub async fn get_by_id<'e, E>(db: E, id: i32) -> Result<Option<ShoppingListItem>>
    where
        E: PgExecutor<'e>,
    {
        let mut builder = ItemQuery::new().id(id).build();
        let item: Option<ShoppingListItem> = builder.build_query_as().fetch_optional(db).await?;
        debug!(found = item.is_some());
        Ok(item)
    }

    /// Insert and return the stored row with its assigned id and `date_added`.
    #[instrument(skip(db, new_item), fields(item_name = %new_item.item_name))]
    pub async fn insert_item<'e, E>(db: E, new_item: &NewItem) -> Result<ShoppingListItem>
    where
        E: PgExecutor<'e>,
    {
        let mut builder = query::insert_item(new_item);
        let item: ShoppingListItem = builder.build_query_as().fetch_one(db).await?;
        debug!(id = item.id, "inserted item");
        Ok(item)
    }

    /// Write the supplied fields of `update` to row `id`.
    ///
    /// Returns nothing; re-fetch with [`get_by_id`](Self::get_by_id) to see
    /// the result. A missing id is not an error.
    #[instrument(skip(db, update))]
    pub async fn update_item<'e, E>(db: E, id: i32, update: &ItemUpdate) -> Result<()>
    where
        E: PgExecutor<'e>,
    {
        let Some(mut builder) = query::update_item(id, update) else {
            debug!("empty update, nothing to write");
            return Ok(());
        };
        let result = builder.build().execute(db).await?;
        debug!(rows_affected = result.rows_affected(), "updated item");
        Ok(())
    }

    /// Remove row `id`. A missing id is not an error.
    #[instrument(skip(db))]
    pub async fn delete_item<'e, E>(db: E, id: i32) -> Result<()>
    where
        E: PgExecutor<'e>,
    {
        let mut builder = query::delete_item(id);
        let result = builder.build().execute(db).await?;
        debug!(rows_affected = result.rows_affected(), "deleted item");
        Ok(())
    }

    /// Rows whose name contains `search_term`, ignoring case. An empty term
    /// matches everything.
    #[instrument(skip(db))]
    pub async fn search_by_term<'e, E>(db: E, search_term: &str) -> Result<Vec<ShoppingListItem>>
    where
        E: PgExecutor<'e>,
    {
        let mut builder = ItemQuery::new().name_contains(search_term).build();
        let items: Vec<ShoppingListItem> = builder.build_query_as().fetch_all(db).await?;
        debug!(rows = items.len(), "searched by term");
        Ok(items)
    }

    /// One page of six rows, 1-indexed. Pages past the end are empty.
    #[instrument(skip(db))]
    pub async fn search_by_page_number<'e, E>(
        db: E,
        page_number: u32,
    ) -> Result<Vec<ShoppingListItem>>
    where
        E: PgExecutor<'e>,
    {
        let mut builder = ItemQuery::new().page(Page::new(page_number)).build();
        let items: Vec<ShoppingListItem> = builder.build_query_as().fetch_all(db).await?;
        debug!(rows = items.len(), "fetched page");
        Ok(items)
    }

    /// Rows added within the last `days_ago` days, measured by the store clock.
    #[instrument(skip(db))]
    pub async fn search_by_days<'e, E>(db: E, days_ago: u32) -> Result<Vec<ShoppingListItem>>
    where
        E: PgExecutor<'e>,
    {
        let mut builder = ItemQuery::new().added_within_days(days_ago).build();
        let items: Vec<ShoppingListItem> = builder.build_query_as().fetch_all(db).await?;
        debug!(rows = items.len(), "searched by days");
        Ok(items)
    }

    /// Exact price totals per category, category descending then total
    /// ascending.
    #[instrument(skip_all)]
    pub async fn total_cost_by_category<'e, E>(db: E) -> Result<Vec<CategoryTotal>>
    where
        E: PgExecutor<'e>,
    {
        let mut builder = query::category_totals();
        let totals: Vec<CategoryTotal> = builder.build_query_as().fetch_all(db).await?;
        debug!(categories = totals.len(), "summed by category");
        Ok(totals)
    }
}
