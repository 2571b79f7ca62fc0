use clap::{ArgAction, Parser, ValueEnum};
use roster_core::DEFAULT_USER_NAME;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Insert a user record and list every user in the store")]
pub struct Cli {
    #[arg(long, env = "ROSTER_DATABASE_URL", help = "Falls back to DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "ROSTER_USER_NAME", default_value = DEFAULT_USER_NAME)]
    pub name: String,
    #[arg(long, env = "ROSTER_ON_ERROR", value_enum, default_value_t = FailurePolicy::Log)]
    pub on_error: FailurePolicy,
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,
    #[arg(long, env = "ROSTER_DB_POOL_MAX", default_value_t = 1)]
    pub max_connections: u32,
    #[arg(
        long,
        env = "ROSTER_DB_ACQUIRE_TIMEOUT",
        default_value_t = 5,
        help = "Seconds to wait for a database connection"
    )]
    pub acquire_timeout: u64,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicy {
    /// Log the failure and exit successfully.
    Log,
    /// Log the failure and exit with status 1.
    Exit,
}

impl FailurePolicy {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Log => ExitCode::SUCCESS,
            Self::Exit => ExitCode::FAILURE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
    Text,
}
