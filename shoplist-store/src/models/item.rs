//! Shopping list rows and write payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Price;

/// Shopping list record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ShoppingListItem {
    pub id: i32,
    pub item_name: String,
    pub price: Price,
    pub date_added: DateTime<Utc>,
    pub checked: bool,
    pub category: String,
}

/// Insert payload. `date_added: None` lets the store stamp `now()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub item_name: String,
    pub price: Price,
    pub category: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
}

impl NewItem {
    pub fn new(item_name: impl Into<String>, price: Price, category: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
            price,
            category: category.into(),
            checked: false,
            date_added: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn date_added(mut self, date_added: DateTime<Utc>) -> Self {
        self.date_added = Some(date_added);
        self
    }
}

/// Partial update. Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemUpdate {
    pub item_name: Option<String>,
    pub price: Option<Price>,
    pub date_added: Option<DateTime<Utc>>,
    pub checked: Option<bool>,
    pub category: Option<String>,
}

impl ItemUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_name(mut self, item_name: impl Into<String>) -> Self {
        self.item_name = Some(item_name.into());
        self
    }

    pub fn price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    pub fn date_added(mut self, date_added: DateTime<Utc>) -> Self {
        self.date_added = Some(date_added);
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// True when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.item_name.is_none()
            && self.price.is_none()
            && self.date_added.is_none()
            && self.checked.is_none()
            && self.category.is_none()
    }
}

/// One row of the per-category cost report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CategoryTotal {
    pub category: String,
    pub total_price: Price,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_defaults() {
        let item = NewItem::new("Celery", Price::new("1.50").unwrap(), "Snack");
        assert!(!item.checked);
        assert!(item.date_added.is_none());
    }

    #[test]
    fn new_item_json_defaults_checked() {
        let item: NewItem = serde_json::from_str(
            r#"{"item_name":"Celery","price":"1.50","category":"Snack"}"#,
        )
        .unwrap();
        assert!(!item.checked);
        assert!(item.date_added.is_none());
        assert_eq!(item.price.as_str(), "1.50");
    }

    #[test]
    fn new_item_json_rejects_bad_price() {
        let result = serde_json::from_str::<NewItem>(
            r#"{"item_name":"Celery","price":"-1.50","category":"Snack"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn update_emptiness() {
        assert!(ItemUpdate::new().is_empty());
        assert!(!ItemUpdate::new().checked(false).is_empty());
        assert!(!ItemUpdate::new().category("").is_empty());
    }

    #[test]
    fn update_from_partial_json() {
        let update: ItemUpdate = serde_json::from_str(r#"{"checked":true}"#).unwrap();
        assert_eq!(update, ItemUpdate::new().checked(true));
    }
}
