//! Fixed-point currency values
//!
//! Prices never pass through `f64`. They travel as decimal text between the
//! caller and PostgreSQL, where the column is `NUMERIC(12, 2)` and every
//! bind is cast with `::numeric`. Text is kept in the form the store renders
//! (`price::text`), so a stored price reads back equal to what was written.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Fractional digits kept by the `NUMERIC(12, 2)` column
pub const PRICE_SCALE: usize = 2;

/// Non-negative decimal with at most two fractional digits.
/// Matches DB constraint: CHECK (price >= 0)
static PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)(?:\.([0-9]{1,2}))?$").expect("invalid price regex"));

/// Validated fixed-point price in canonical two-place form, e.g. `"1.50"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(try_from = "String", into = "String")]
#[sqlx(transparent)]
pub struct Price(String);

impl Price {
    /// Create a price from decimal text, padded to two places.
    ///
    /// # Example
    /// ```
    /// use shoplist_store::models::Price;
    ///
    /// assert_eq!(Price::new("1.50").unwrap().as_str(), "1.50");
    /// assert_eq!(Price::new("21").unwrap().as_str(), "21.00");
    /// assert!(Price::new("1.555").is_err());  // store would round
    /// assert!(Price::new("-3.00").is_err());
    /// assert!(Price::new("1e3").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "price" });
        }

        let Some(caps) = PRICE_RE.captures(trimmed) else {
            return Err(ValidationError::InvalidFormat {
                field: "price",
                value: s.to_owned(),
                reason: "must be a non-negative decimal with at most two places, such as 1.50",
            });
        };

        // Same rendering as NUMERIC(12, 2)::text: no leading zeros, two places
        let whole = caps[1].trim_start_matches('0');
        let whole = if whole.is_empty() { "0" } else { whole };
        let fraction = caps.get(2).map_or("", |m| m.as_str());

        Ok(Self(format!("{whole}.{fraction:0<width$}", width = PRICE_SCALE)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Price {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Price {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl AsRef<str> for Price {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
