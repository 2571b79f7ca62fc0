use std::time::Duration;

use async_trait::async_trait;
use roster_core::{NewUser, User, UserStore};
#[cfg(any(feature = "postgres", feature = "sqlite"))]
use sqlx_core::pool::PoolOptions;
use url::Url;

use crate::DbError;
#[cfg(feature = "sqlite")]
use crate::{local::LocalUserRepo, SqlitePool};
#[cfg(feature = "postgres")]
use crate::{repo::UserRepo, PgPool};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self, DbError> {
        let parsed = Url::parse(url)?;
        match parsed.scheme() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(DbError::UnsupportedScheme(other.to_string())),
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOptions {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            max_connections: 1,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

#[cfg(any(feature = "postgres", feature = "sqlite"))]
fn pool_options<DB: sqlx_core::database::Database>(options: &ClientOptions) -> PoolOptions<DB> {
    PoolOptions::new()
        .max_connections(options.max_connections)
        .acquire_timeout(options.acquire_timeout)
}

/// Store client backed by a lazily connected pool.
///
/// Nothing touches the network until the first query, so an unreachable
/// store is reported by that query rather than by [`DbClient::new`].
#[derive(Debug)]
pub enum DbClient {
    #[cfg(feature = "postgres")]
    Postgres(PgPool),
    #[cfg(feature = "sqlite")]
    Sqlite(SqlitePool),
}

impl DbClient {
    pub fn new(url: &str, options: &ClientOptions) -> Result<Self, DbError> {
        let backend = Backend::from_url(url)?;
        let client = match backend {
            Backend::Postgres => Self::lazy_postgres(url, options)?,
            Backend::Sqlite => Self::lazy_sqlite(url, options)?,
        };
        tracing::info!(
            event = "db_client_created",
            backend = %backend,
            max_connections = options.max_connections,
            acquire_timeout_ms = options.acquire_timeout.as_millis() as u64,
        );
        Ok(client)
    }

    #[cfg(feature = "postgres")]
    fn lazy_postgres(url: &str, options: &ClientOptions) -> Result<Self, DbError> {
        let connect = crate::postgres_options(url)?;
        Ok(Self::Postgres(
            pool_options(options).connect_lazy_with(connect),
        ))
    }

    #[cfg(not(feature = "postgres"))]
    fn lazy_postgres(_url: &str, _options: &ClientOptions) -> Result<Self, DbError> {
        Err(DbError::BackendDisabled(Backend::Postgres))
    }

    #[cfg(feature = "sqlite")]
    fn lazy_sqlite(url: &str, options: &ClientOptions) -> Result<Self, DbError> {
        let connect = crate::sqlite_options(url)?;
        Ok(Self::Sqlite(pool_options(options).connect_lazy_with(connect)))
    }

    #[cfg(not(feature = "sqlite"))]
    fn lazy_sqlite(_url: &str, _options: &ClientOptions) -> Result<Self, DbError> {
        Err(DbError::BackendDisabled(Backend::Sqlite))
    }

    pub fn backend(&self) -> Backend {
        match *self {
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => Backend::Postgres,
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => Backend::Sqlite,
        }
    }

    pub fn is_closed(&self) -> bool {
        match *self {
            #[cfg(feature = "postgres")]
            Self::Postgres(ref pool) => pool.is_closed(),
            #[cfg(feature = "sqlite")]
            Self::Sqlite(ref pool) => pool.is_closed(),
        }
    }
}

#[async_trait]
impl UserStore for DbClient {
    type Error = DbError;

    async fn create_user(&self, new_user: &NewUser) -> Result<User, Self::Error> {
        let user = match *self {
            #[cfg(feature = "postgres")]
            Self::Postgres(ref pool) => UserRepo::new(pool).create(new_user).await?,
            #[cfg(feature = "sqlite")]
            Self::Sqlite(ref pool) => LocalUserRepo::new(pool).create(new_user).await?,
        };
        Ok(user)
    }

    async fn find_many_users(&self) -> Result<Vec<User>, Self::Error> {
        let users = match *self {
            #[cfg(feature = "postgres")]
            Self::Postgres(ref pool) => UserRepo::new(pool).list().await?,
            #[cfg(feature = "sqlite")]
            Self::Sqlite(ref pool) => LocalUserRepo::new(pool).list().await?,
        };
        Ok(users)
    }

    async fn disconnect(&self) {
        match *self {
            #[cfg(feature = "postgres")]
            Self::Postgres(ref pool) => pool.close().await,
            #[cfg(feature = "sqlite")]
            Self::Sqlite(ref pool) => pool.close().await,
        }
        tracing::info!(event = "db_disconnected", backend = %self.backend());
    }
}
