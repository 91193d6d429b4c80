//! Configuration module

mod site;

pub use site::BlogConfig;
pub use site::DateFormatConfig;
pub use site::FooterConfig;
pub use site::SiteConfig;
