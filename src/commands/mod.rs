//! Command implementations behind the CLI

pub mod list;
pub mod render;
