//! Blocking HTTP client for the patch-table page.

use std::time::Duration;

use crate::error::CatalogError;
use crate::table::{PatchTable, parse_patch_table};

/// Built-in patch-table endpoint, used when neither the CLI nor the settings
/// file names one.
pub const DEFAULT_CATALOG_URL: &str = "http://www.benoitren.be/switch-gamepatches.html";

/// The page is small and static; anything slower than this is a dead host.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Download and parse the patch table.
///
/// One GET, no retries. Transport failures, non-2xx statuses, and a missing
/// table all propagate as errors — the caller decides whether that sinks the
/// run (it never sinks a local scan, which completes beforehand).
pub fn fetch_catalog(url: &str) -> Result<PatchTable, CatalogError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;

    log::debug!("Fetching patch table from {url}");
    let response = client.get(url).send()?;
    if !response.status().is_success() {
        return Err(CatalogError::Status {
            status: response.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text()?;
    parse_patch_table(&body)
}
