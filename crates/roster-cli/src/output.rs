use std::io::{self, Write};

use roster_core::{Reporter, User};
use serde::Serialize;

use crate::cli_args::OutputFormat;

fn render_json<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string(value),
        _ => serde_json::to_string_pretty(value),
    }
}

pub(crate) fn render_user(format: OutputFormat, user: &User) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(user.to_string()),
        _ => render_json(format, user),
    }
}

pub(crate) fn render_users(
    format: OutputFormat,
    users: &[User],
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text if users.is_empty() => Ok("[]".to_string()),
        OutputFormat::Text => {
            let rows: Vec<String> = users.iter().map(|user| format!("  {user}")).collect();
            Ok(format!("[\n{}\n]", rows.join(",\n")))
        }
        _ => render_json(format, users),
    }
}

/// Writes records to stdout as they are produced.
pub struct StdoutReporter {
    format: OutputFormat,
}

impl StdoutReporter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn emit(&self, rendered: Result<String, serde_json::Error>) {
        let result = rendered
            .map_err(io::Error::from)
            .and_then(|text| writeln!(io::stdout().lock(), "{text}"));
        if let Err(err) = result {
            tracing::warn!(event = "stdout_write_failed", error = %err);
        }
    }
}

impl Reporter for StdoutReporter {
    fn created(&mut self, user: &User) {
        self.emit(render_user(self.format, user));
    }

    fn listed(&mut self, users: &[User]) {
        self.emit(render_users(self.format, users));
    }
}
