use std::fs;
use std::path::Path;
use std::time::Duration;

use tracing::info;

use crate::error::ScheduleError;

pub const DEFAULT_URL: &str = "http://airdates.tv";

/// Download the listings page and overwrite the snapshot at `path`
///
/// # Returns
/// Number of bytes written
pub fn refresh_snapshot(url: &str, path: &Path, timeout: Duration) -> Result<usize, ScheduleError> {
    info!(%url, path = %path.display(), "refreshing snapshot");

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let body = client.get(url).send()?.error_for_status()?.text()?;

    fs::write(path, &body)?;
    info!(bytes = body.len(), "snapshot written");
    Ok(body.len())
}
