//! Content, scroll-driven view state, and decorative render commands for the
//! folio portfolio page.

pub mod config;
pub mod content;
pub mod error;
pub mod model;
pub mod views;

pub use config::{ConfigError, PageConfig};
pub use error::FolioError;
