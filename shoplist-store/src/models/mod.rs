//! Domain models for the shopping list
//!
//! Prices are validated when constructed. Everything else is passed to the
//! store as-is and checked by its column constraints.

pub mod item;
pub mod pagination;
pub mod price;
pub mod validation;

pub use item::{CategoryTotal, ItemUpdate, NewItem, ShoppingListItem};
pub use pagination::{Page, PAGE_SIZE};
pub use price::Price;
pub use validation::ValidationError;
