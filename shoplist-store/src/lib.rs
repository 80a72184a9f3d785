//! shoplist-store: data access for the `shopping_list` table
//!
//! CRUD over shopping list rows plus a few reporting queries (name search,
//! fixed-size pages, recent additions, per-category totals). Every operation
//! takes its PostgreSQL executor as the first argument; the crate keeps no
//! connection of its own.
//!
//! ```ignore
//! use shoplist_store::{db, DbConfig, ShoppingListService};
//!
//! let pool = db::create_pool(&DbConfig::from_env()?).await?;
//! let snacks = ShoppingListService::search_by_term(&pool, "celery").await?;
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod query;
pub mod service;

pub use config::DbConfig;
pub use error::{ErrorCategory, Result, ShoppingListError};
pub use models::{CategoryTotal, ItemUpdate, NewItem, Page, Price, ShoppingListItem, PAGE_SIZE};
pub use service::ShoppingListService;
