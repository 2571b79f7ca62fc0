#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_raw_string_hashes)]

#[cfg(any(feature = "postgres", feature = "sqlite"))]
use sqlx_core::pool::{Pool, PoolOptions};
#[cfg(feature = "postgres")]
use sqlx_postgres::{PgConnectOptions, Postgres};
#[cfg(feature = "sqlite")]
use sqlx_sqlite::{Sqlite, SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
#[cfg(any(feature = "postgres", feature = "sqlite"))]
use std::str::FromStr;
#[cfg(feature = "sqlite")]
use std::time::Duration;

mod client;
mod error;
#[cfg(feature = "sqlite")]
pub mod local;
#[cfg(feature = "postgres")]
pub mod repo;

pub use client::{Backend, ClientOptions, DbClient};
pub use error::DbError;

#[cfg(feature = "sqlite")]
pub type SqlitePool = Pool<Sqlite>;
#[cfg(feature = "postgres")]
pub type PgPool = Pool<Postgres>;

#[cfg(feature = "postgres")]
pub fn postgres_options(url: &str) -> Result<PgConnectOptions, sqlx_core::Error> {
    PgConnectOptions::from_str(url)
}

#[cfg(feature = "sqlite")]
pub fn sqlite_options(url: &str) -> Result<SqliteConnectOptions, sqlx_core::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true);
    Ok(options)
}

#[cfg(feature = "postgres")]
pub async fn connect_postgres_with_max(
    url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx_core::Error> {
    PoolOptions::new()
        .max_connections(max_connections)
        .connect_with(postgres_options(url)?)
        .await
}

#[cfg(feature = "sqlite")]
pub async fn connect_sqlite_with_max(
    url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx_core::Error> {
    PoolOptions::new()
        .max_connections(max_connections)
        .connect_with(sqlite_options(url)?)
        .await
}
