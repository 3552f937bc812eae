//! Inventory vs. patch-table reconciliation.

use std::collections::HashSet;

use switch_shelf_core::normalized_key;

/// Return the local game names with no match in the remote key set, in input
/// order.
///
/// `remote_keys` holds normalized, case-folded keys (the form
/// [`normalized_key`] produces); each local name is folded the same way
/// before the membership check, so comparison is case-insensitive. Only
/// exact key matches count — near-spellings are deliberately not chased, to
/// avoid false positives.
pub fn unmatched_games<'a>(
    local_names: &'a [String],
    remote_keys: &HashSet<String>,
) -> Vec<&'a str> {
    local_names
        .iter()
        .map(String::as_str)
        .filter(|name| !remote_keys.contains(&normalized_key(name)))
        .collect()
}
