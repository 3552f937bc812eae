//! Directory scanner for the games root.
//!
//! Layout contract: the root contains one folder per game (folder name =
//! display name, possibly suffixed with a bundled-update marker) plus one
//! shared folder, conventionally `_DLC.and.Updates`, holding flat update and
//! DLC subfolders for every game, associated by name prefix.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use switch_shelf_core::{canonical_name, extract_version};

use crate::error::InventoryError;

/// Conventional name of the shared updates/DLC folder, a sibling of the game
/// folders.
pub const SHARED_DIR_NAME: &str = "_DLC.and.Updates";

/// Root entries whose names start with this prefix are the shared folder (or
/// a variant of it) and never a game.
pub const SHARED_DIR_PREFIX: &str = "_DLC";

/// A game's resolved identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameIdentity {
    /// Canonical display name, derived from the folder name with any bundled
    /// `.and.Update.` marker stripped.
    pub name: String,
    /// Base filename (no extension) of the game binary inside the folder
    /// tree. Empty when no qualifying file exists — a valid state for
    /// folders that only hold update files.
    pub short_name: String,
    /// Uppercased extension of the game binary, without the dot. Empty
    /// whenever `short_name` is.
    pub extension: String,
}

/// One scanned game: identity plus associated update versions and DLC
/// package names. The unit exported to CSV and reconciled against the patch
/// table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryEntry {
    pub identity: GameIdentity,
    /// Version tokens, sorted as plain strings ("1.10" before "1.2").
    /// Duplicates from the self-tag and a sibling folder are kept.
    pub updates: Vec<String>,
    /// Basenames of matching DLC entries in the shared folder.
    pub dlcs: Vec<String>,
}

/// Scan behavior knobs.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Short-name policy: `false` (default) takes the first qualifying file
    /// in sorted traversal order; `true` restores the historical behavior
    /// where the last file visited wins.
    pub legacy_short_name: bool,
}

/// Scan the games root and return one entry per game folder, sorted by
/// folder name.
///
/// Non-directories and entries named with the shared-folder prefix are
/// skipped. A missing or unreadable root is fatal; everything below it is
/// handled tolerantly (warn and continue).
pub fn scan(root: &Path, options: &ScanOptions) -> Result<Vec<InventoryEntry>, InventoryError> {
    if !root.is_dir() {
        return Err(InventoryError::NotADirectory(root.to_path_buf()));
    }
    let shared_dir = root.join(SHARED_DIR_NAME);

    let mut game_dirs: Vec<PathBuf> = fs::read_dir(root)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    game_dirs.sort();

    let mut entries = Vec::new();
    for path in &game_dirs {
        let folder_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => {
                log::warn!("Skipping folder with non-UTF-8 name: {}", path.display());
                continue;
            }
        };
        if folder_name.starts_with(SHARED_DIR_PREFIX) {
            continue;
        }

        log::debug!("Processing game {folder_name}");
        let identity = resolve_identity(path, options);
        let updates = collect_updates(folder_name, &identity.name, &shared_dir);
        let dlcs = collect_dlcs(&identity.name, &shared_dir);
        entries.push(InventoryEntry {
            identity,
            updates,
            dlcs,
        });
    }

    Ok(entries)
}

/// Resolve a game folder's identity: canonical name from the folder name,
/// short name and extension from the first qualifying file in the folder
/// tree (lexicographic path order breaks ties deterministically).
pub fn resolve_identity(folder: &Path, options: &ScanOptions) -> GameIdentity {
    let folder_name = folder
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let name = canonical_name(folder_name).to_string();

    let mut files = Vec::new();
    visit_files(folder, &mut files);

    let mut short_name = String::new();
    let mut extension = String::new();
    for path in &files {
        let file_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => continue,
        };
        if !is_game_file(file_name) {
            continue;
        }
        short_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_uppercase();
        if !options.legacy_short_name {
            break;
        }
    }

    GameIdentity {
        name,
        short_name,
        extension,
    }
}

/// Collect update versions for a game from both sources: the game's own
/// folder name (bundled release) and prefix-matching entries in the shared
/// folder. Tokens without a parsable version are skipped; the merged list is
/// sorted as plain strings and duplicates are kept.
pub fn collect_updates(folder_name: &str, canonical: &str, shared_dir: &Path) -> Vec<String> {
    let mut updates = Vec::new();

    if folder_name.to_ascii_uppercase().contains("UPDATE") {
        match extract_version(folder_name) {
            Some(version) => updates.push(version.to_string()),
            None => {
                log::warn!("Update tag without version token in folder name \"{folder_name}\"")
            }
        }
    }

    for entry_name in shared_entry_names(shared_dir) {
        if !entry_name.starts_with(canonical) {
            continue;
        }
        if let Some(version) = extract_version(&entry_name) {
            updates.push(version.to_string());
        }
    }

    updates.sort();
    updates
}

/// Collect DLC entry basenames for a game: shared-folder entries matching
/// `*<canonical>*DLC*`. Matching is case-sensitive, like the OS glob it
/// replaces.
pub fn collect_dlcs(canonical: &str, shared_dir: &Path) -> Vec<String> {
    shared_entry_names(shared_dir)
        .into_iter()
        .filter(|entry_name| matches_dlc_pattern(entry_name, canonical))
        .collect()
}

/// `*<canonical>*DLC*`: an occurrence of the game name with "DLC" somewhere
/// after it.
fn matches_dlc_pattern(entry_name: &str, canonical: &str) -> bool {
    match entry_name.find(canonical) {
        Some(pos) => entry_name[pos + canonical.len()..].contains("DLC"),
        None => false,
    }
}

/// A file qualifies as the game binary when its name carries no update
/// marker.
fn is_game_file(file_name: &str) -> bool {
    let upper = file_name.to_ascii_uppercase();
    !upper.contains("UPDATE") && !upper.contains("UPD")
}

/// Entry basenames of the shared updates/DLC folder, sorted. A missing
/// shared folder is a valid library state and yields no entries.
fn shared_entry_names(shared_dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(shared_dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };
    let mut names: Vec<String> = entries
        .flatten()
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
    names.sort();
    names
}

/// Recursively collect file paths under `dir` in sorted order. Unreadable
/// subdirectories are warned about and skipped.
fn visit_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Cannot read {}: {e}", dir.display());
            return;
        }
    };

    let mut paths: Vec<PathBuf> = entries.flatten().map(|entry| entry.path()).collect();
    paths.sort();

    for path in paths {
        if path.is_dir() {
            visit_files(&path, out);
        } else if path.is_file() {
            out.push(path);
        }
    }
}
