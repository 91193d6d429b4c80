//! Feed shaping - featured/remainder split and category filtering

mod filter;
mod partition;

pub use filter::{CategoryFilterSet, CategoryOption};
pub use partition::{partition, FeedPartition};
