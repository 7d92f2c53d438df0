use thiserror::Error;

use crate::config::ConfigError;
use crate::model::{ContactError, LightboxError};

/// Any failure surfaced by the page core.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("lightbox: {0}")]
    Lightbox(#[from] LightboxError),
    #[error("contact: {0}")]
    Contact(#[from] ContactError),
}
