//! Connection pool setup for callers that don't bring their own handle

pub mod pool;

pub use pool::{create_pool, create_pool_with_options};
