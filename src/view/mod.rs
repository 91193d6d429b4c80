//! Page views - own per-page UI state and turn it into template data

mod blog;
mod footer;

pub use blog::BlogIndexView;
pub use footer::FooterView;
