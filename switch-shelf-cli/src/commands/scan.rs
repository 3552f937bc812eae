use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use switch_shelf_lib::{ScanOptions, scan, write_inventory};

/// Run the `scan` command.
pub(crate) fn run_scan(root: &Path, export: Option<PathBuf>, legacy_short_name: bool) {
    log::info!(
        "Scanning games in: {}",
        root.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!("");

    let options = ScanOptions { legacy_short_name };
    let entries = match scan(root, &options) {
        Ok(entries) => entries,
        Err(e) => {
            log::error!("Scan failed: {e}");
            std::process::exit(1);
        }
    };

    let mut total_updates = 0usize;
    let mut total_dlcs = 0usize;

    for entry in &entries {
        log::info!(
            "{}",
            entry.identity.name.if_supports_color(Stdout, |t| t.bold()),
        );
        if entry.identity.short_name.is_empty() {
            log::info!(
                "  {}",
                "No game file found".if_supports_color(Stdout, |t| t.dimmed()),
            );
        } else {
            log::info!(
                "  File:    {} [{}]",
                entry.identity.short_name,
                entry.identity.extension,
            );
        }
        if !entry.updates.is_empty() {
            log::info!("  Updates: {}", entry.updates.join(", "));
            total_updates += entry.updates.len();
        }
        if !entry.dlcs.is_empty() {
            log::info!("  DLC:     {}", entry.dlcs.join(", "));
            total_dlcs += entry.dlcs.len();
        }
    }

    log::info!("");
    log::info!("{}", "Scan complete".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Games:   {:>6}", entries.len());
    log::info!("  Updates: {:>6}", total_updates);
    log::info!("  DLC:     {:>6}", total_dlcs);

    if let Some(path) = export {
        match write_inventory(&path, &entries) {
            Ok(()) => {
                log::info!(
                    "  {} Inventory written to {}",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                    path.display(),
                );
            }
            Err(e) => {
                log::error!("Failed to write {}: {e}", path.display());
                std::process::exit(1);
            }
        }
    }
}
