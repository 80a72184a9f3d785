//! SQL construction for the `shopping_list` table
//!
//! Every value reaches PostgreSQL as a bound parameter. The only text spliced
//! into statements is the table name, the column list and sort-key columns,
//! all of which are `'static` strings owned by this module.

use sqlx::{Postgres, QueryBuilder};

use crate::models::{ItemUpdate, NewItem, Page};

pub const TABLE: &str = "shopping_list";

/// Row projection. `price` is rendered as text so it decodes into
/// [`Price`](crate::models::Price) without a float round trip.
pub const ITEM_COLUMNS: &str = "id, item_name, price::text AS price, date_added, checked, category";

const DEFAULT_SORT: &[SortKey] = &[SortKey::asc("id")];

/// Widest day window that keeps `now() - interval` inside the PostgreSQL
/// timestamp range (4713 BC); wider windows already cover every row.
pub const MAX_WINDOW_DAYS: u32 = 2_000_000;

/// Category descending, then summed total ascending. The second key is the
/// numeric aggregate, not the `total_price` alias, which is text.
const CATEGORY_TOTAL_SORT: &[SortKey] = &[SortKey::desc("category"), SortKey::asc("SUM(price)")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub(crate) fn as_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// One `ORDER BY` key with its own direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SortKey {
    column: &'static str,
    direction: Direction,
}

impl SortKey {
    pub(crate) const fn asc(column: &'static str) -> Self {
        Self {
            column,
            direction: Direction::Asc,
        }
    }

    pub(crate) const fn desc(column: &'static str) -> Self {
        Self {
            column,
            direction: Direction::Desc,
        }
    }
}

/// Append `ORDER BY k1 DIR, k2 DIR, ...`. No-op for an empty slice.
pub(crate) fn push_order_by(builder: &mut QueryBuilder<'_, Postgres>, keys: &[SortKey]) {
    if keys.is_empty() {
        return;
    }
    builder.push(" ORDER BY ");
    let mut order = builder.separated(", ");
    for key in keys {
        order.push(format!("{} {}", key.column, key.direction.as_sql()));
    }
}

/// Wrap a search term for a literal, case-insensitive substring match.
///
/// LIKE metacharacters in the term are escaped with the default `\` escape.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Predicate {
    IdEquals(i32),
    NameContains(String),
    AddedWithinDays(i32),
}

/// Composable `SELECT` over shopping list rows.
///
/// Predicates are ANDed in the order they were added. Rows come back in
/// insertion (id) order.
#[derive(Debug, Clone, Default)]
pub struct ItemQuery {
    predicates: Vec<Predicate>,
    page: Option<Page>,
}

impl ItemQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i32) -> Self {
        self.predicates.push(Predicate::IdEquals(id));
        self
    }

    pub fn name_contains(mut self, term: &str) -> Self {
        self.predicates
            .push(Predicate::NameContains(contains_pattern(term)));
        self
    }

    /// Keep rows added after `now() - days`, with `now()` taken store-side.
    /// Counts above [`MAX_WINDOW_DAYS`] are capped to it.
    pub fn added_within_days(mut self, days: u32) -> Self {
        let days = i32::try_from(days.min(MAX_WINDOW_DAYS)).unwrap_or(i32::MAX);
        self.predicates.push(Predicate::AddedWithinDays(days));
        self
    }

    pub fn page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    pub fn build(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(format!("SELECT {ITEM_COLUMNS} FROM {TABLE}"));

        for (i, predicate) in self.predicates.iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            match predicate {
                Predicate::IdEquals(id) => {
                    builder.push("id = ").push_bind(*id);
                }
                Predicate::NameContains(pattern) => {
                    builder.push("item_name ILIKE ").push_bind(pattern.clone());
                }
                Predicate::AddedWithinDays(days) => {
                    builder
                        .push("date_added > now() - make_interval(days => ")
                        .push_bind(*days)
                        .push(")");
                }
            }
        }

        push_order_by(&mut builder, DEFAULT_SORT);

        if let Some(page) = self.page {
            builder
                .push(" LIMIT ")
                .push_bind(page.limit())
                .push(" OFFSET ")
                .push_bind(page.offset());
        }

        builder
    }
}

/// `INSERT ... RETURNING` the stored row. A missing `date_added` falls back
/// to the store clock.
pub fn insert_item(item: &NewItem) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "INSERT INTO {TABLE} (item_name, price, date_added, checked, category) VALUES ("
    ));
    builder
        .push_bind(item.item_name.clone())
        .push(", ")
        .push_bind(item.price.clone())
        .push("::numeric, COALESCE(")
        .push_bind(item.date_added)
        .push(", now()), ")
        .push_bind(item.checked)
        .push(", ")
        .push_bind(item.category.clone())
        .push(format!(") RETURNING {ITEM_COLUMNS}"));
    builder
}

/// `UPDATE` touching only the supplied fields. `None` when there is nothing
/// to write.
pub fn update_item(id: i32, update: &ItemUpdate) -> Option<QueryBuilder<'static, Postgres>> {
    if update.is_empty() {
        return None;
    }

    let mut builder = QueryBuilder::new(format!("UPDATE {TABLE} SET "));
    let mut set = builder.separated(", ");
    if let Some(item_name) = &update.item_name {
        set.push("item_name = ");
        set.push_bind_unseparated(item_name.clone());
    }
    if let Some(price) = &update.price {
        set.push("price = ");
        set.push_bind_unseparated(price.clone());
        set.push_unseparated("::numeric");
    }
    if let Some(date_added) = update.date_added {
        set.push("date_added = ");
        set.push_bind_unseparated(date_added);
    }
    if let Some(checked) = update.checked {
        set.push("checked = ");
        set.push_bind_unseparated(checked);
    }
    if let Some(category) = &update.category {
        set.push("category = ");
        set.push_bind_unseparated(category.clone());
    }

    builder.push(" WHERE id = ").push_bind(id);
    Some(builder)
}

pub fn delete_item(id: i32) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("DELETE FROM {TABLE} WHERE id = "));
    builder.push_bind(id);
    builder
}

/// Per-category `SUM(price)`, summed in `numeric` and returned as text.
pub fn category_totals() -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT category, SUM(price)::text AS total_price FROM {TABLE} GROUP BY category"
    ));
    push_order_by(&mut builder, CATEGORY_TOTAL_SORT);
    builder
}
