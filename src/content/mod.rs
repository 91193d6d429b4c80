//! Content module - feed items, categories and the feed loader

mod item;
pub mod loader;

pub use item::{Categorized, CategoryKey, CategoryUniverse, ContentItem};
pub use loader::FeedLoader;
