use thiserror::Error;

use crate::Backend;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("invalid database url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("unsupported database url scheme `{0}`")]
    UnsupportedScheme(String),
    #[error("{0} support is not compiled in")]
    BackendDisabled(Backend),
    #[error(transparent)]
    Sqlx(#[from] sqlx_core::Error),
}
