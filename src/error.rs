//! Error types for the I/O edges of the portal

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Failed to parse config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Failed to parse feed {path:?}: {message}")]
    FeedParse { path: PathBuf, message: String },

    #[error("Unsupported data file format: {0:?}")]
    UnsupportedFormat(PathBuf),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
