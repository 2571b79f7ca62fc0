use std::env;
use std::time::Duration;

use roster_core::NewUser;
use roster_db::ClientOptions;

use crate::cli_args::{Cli, OutputFormat};

const FALLBACK_URL_ENV: &str = "DATABASE_URL";

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub new_user: NewUser,
    pub client: ClientOptions,
    pub format: OutputFormat,
}

impl Settings {
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        Self::resolve_with(cli, env::var(FALLBACK_URL_ENV).ok())
    }

    pub(crate) fn resolve_with(cli: &Cli, fallback_url: Option<String>) -> anyhow::Result<Self> {
        let database_url = cli
            .database_url
            .clone()
            .or(fallback_url)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "database url not set; pass --database-url or set ROSTER_DATABASE_URL or {}",
                    FALLBACK_URL_ENV
                )
            })?;
        if cli.max_connections == 0 {
            anyhow::bail!("--max-connections must be at least 1");
        }

        Ok(Self {
            database_url,
            new_user: NewUser::new(cli.name.clone()),
            client: ClientOptions {
                max_connections: cli.max_connections,
                acquire_timeout: Duration::from_secs(cli.acquire_timeout),
            },
            format: cli.format,
        })
    }
}
