use std::collections::HashSet;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use switch_shelf_core::{extract_version, normalized_key};
use switch_shelf_lib::settings;
use switch_shelf_lib::{ScanOptions, scan, unmatched_games};
use switch_shelf_patches::{DEFAULT_CATALOG_URL, fetch_catalog};

/// Run the `reconcile` command: scan locally, fetch the patch table, then
/// report games that are behind the latest known update or missing from the
/// table entirely.
pub(crate) fn run_reconcile(root: &Path, url_override: Option<String>) {
    let entries = match scan(root, &ScanOptions::default()) {
        Ok(entries) => entries,
        Err(e) => {
            log::error!("Scan failed: {e}");
            std::process::exit(1);
        }
    };
    log::info!("Scanned {} games in {}", entries.len(), root.display());

    let url = settings::resolve_catalog_url(url_override)
        .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
    let table = match fetch_catalog(&url) {
        Ok(table) => table,
        Err(e) => {
            // The inventory above already stands on its own.
            log::error!("Patch-table fetch failed: {e}");
            std::process::exit(1);
        }
    };
    log::info!("Patch table lists {} games ({url})", table.len());
    log::info!("");

    let local_names: Vec<String> = entries.iter().map(|e| e.identity.name.clone()).collect();
    let remote_keys: HashSet<String> = table.keys().cloned().collect();
    let unmatched = unmatched_games(&local_names, &remote_keys);

    let mut behind = 0usize;
    for entry in &entries {
        let Some(remote) = table.get(&normalized_key(&entry.identity.name)) else {
            continue;
        };
        // The update label is free text; prefer its version token when it
        // carries one.
        let label = remote.latest_update.as_str();
        let wanted = extract_version(label).unwrap_or(label);
        if entry.updates.iter().any(|installed| installed == wanted) {
            continue;
        }
        behind += 1;
        log::info!(
            "  {} {} is behind: latest update {} ({}), installed [{}]",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            entry.identity.name.if_supports_color(Stdout, |t| t.bold()),
            remote.latest_update,
            remote.update_date,
            entry.updates.join(", "),
        );
    }

    for name in &unmatched {
        log::warn!(
            "  {} {} not found in the patch table",
            "?".if_supports_color(Stdout, |t| t.yellow()),
            name.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    log::info!("");
    log::info!(
        "{}",
        "Reconcile complete".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Games:     {:>6}", entries.len());
    log::info!("  Matched:   {:>6}", entries.len() - unmatched.len());
    log::info!("  Behind:    {:>6}", behind);
    log::info!("  Unmatched: {:>6}", unmatched.len());
}
