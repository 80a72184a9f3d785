//! Fixed-size page arithmetic

use serde::{Deserialize, Serialize};

/// Items per page for paged listings
pub const PAGE_SIZE: u32 = 6;

/// A 1-indexed page of the shopping list.
///
/// Page 0 is out of range; it maps to `LIMIT 0` so the query still runs
/// and comes back empty instead of sending a negative offset to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub number: u32,
}

impl Page {
    pub fn new(number: u32) -> Self {
        Self { number }
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        i64::from(self.number.saturating_sub(1)) * i64::from(PAGE_SIZE)
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> i64 {
        if self.number == 0 {
            0
        } else {
            i64::from(PAGE_SIZE)
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self { number: 1 }
    }
}
