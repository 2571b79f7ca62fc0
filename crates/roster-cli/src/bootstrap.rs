use roster_core::{run_scoped, SeedReport};
use roster_db::DbClient;

use crate::output::StdoutReporter;
use crate::settings::Settings;

/// One bootstrap run: build the client, seed, list, release.
///
/// A client that fails to build holds nothing, so only runs that get a
/// client go through the release in `run_scoped`.
pub async fn run(settings: &Settings) -> anyhow::Result<SeedReport> {
    let client = DbClient::new(&settings.database_url, &settings.client)?;
    let mut reporter = StdoutReporter::new(settings.format);
    let report = run_scoped(client, &settings.new_user, &mut reporter).await?;
    Ok(report)
}
