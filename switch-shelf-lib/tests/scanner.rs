use std::fs;
use std::path::Path;

use switch_shelf_lib::scanner::{self, ScanOptions};
use switch_shelf_lib::{InventoryEntry, scan, write_inventory};

/// Build a game library fixture:
///
/// ```text
/// root/
///   GameX.and.Update.v1.0/
///     gamex.nsp
///   Mario.Kart.8.Deluxe/
///     data/mk8d.xci
///     mk8d.Update.v2.1.0.nsp
///   Update.Only/
///     patch.update.nsp
///   _DLC.and.Updates/
///     GameX.Update.v1.2/
///     GameX DLC Pack1/
///     GameX DLC Pack2/
///     Mario.Kart.8.Deluxe.Update.v1.10/
///     Mario.Kart.8.Deluxe.Update.v1.2/
///     Unrelated.Update.v9.9/
///   stray-file.txt
/// ```
fn build_library(root: &Path) {
    let gamex = root.join("GameX.and.Update.v1.0");
    fs::create_dir(&gamex).unwrap();
    fs::write(gamex.join("gamex.nsp"), b"").unwrap();

    let mk8d = root.join("Mario.Kart.8.Deluxe");
    fs::create_dir_all(mk8d.join("data")).unwrap();
    fs::write(mk8d.join("data").join("mk8d.xci"), b"").unwrap();
    fs::write(mk8d.join("mk8d.Update.v2.1.0.nsp"), b"").unwrap();

    let update_only = root.join("Update.Only");
    fs::create_dir(&update_only).unwrap();
    fs::write(update_only.join("patch.update.nsp"), b"").unwrap();

    let shared = root.join("_DLC.and.Updates");
    fs::create_dir(&shared).unwrap();
    for name in [
        "GameX.Update.v1.2",
        "GameX DLC Pack1",
        "GameX DLC Pack2",
        "Mario.Kart.8.Deluxe.Update.v1.10",
        "Mario.Kart.8.Deluxe.Update.v1.2",
        "Unrelated.Update.v9.9",
    ] {
        fs::create_dir(shared.join(name)).unwrap();
    }

    fs::write(root.join("stray-file.txt"), b"").unwrap();
}

fn entry<'a>(entries: &'a [InventoryEntry], name: &str) -> &'a InventoryEntry {
    entries
        .iter()
        .find(|e| e.identity.name == name)
        .unwrap_or_else(|| panic!("no entry for {name}"))
}

#[test]
fn scan_skips_shared_dir_and_non_directories() {
    let dir = tempfile::tempdir().unwrap();
    build_library(dir.path());

    let entries = scan(dir.path(), &ScanOptions::default()).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.identity.name.as_str()).collect();
    assert_eq!(names, vec!["GameX", "Mario.Kart.8.Deluxe", "Update.Only"]);
}

#[test]
fn bundled_update_marker_is_stripped_from_the_name() {
    let dir = tempfile::tempdir().unwrap();
    build_library(dir.path());

    let entries = scan(dir.path(), &ScanOptions::default()).unwrap();
    assert_eq!(entry(&entries, "GameX").identity.name, "GameX");
}

#[test]
fn short_name_and_extension_come_from_a_non_update_file() {
    let dir = tempfile::tempdir().unwrap();
    build_library(dir.path());

    let entries = scan(dir.path(), &ScanOptions::default()).unwrap();
    let gamex = entry(&entries, "GameX");
    assert_eq!(gamex.identity.short_name, "gamex");
    assert_eq!(gamex.identity.extension, "NSP");

    // mk8d.Update.v2.1.0.nsp carries an update marker; the file under data/
    // is the binary.
    let mk8d = entry(&entries, "Mario.Kart.8.Deluxe");
    assert_eq!(mk8d.identity.short_name, "mk8d");
    assert_eq!(mk8d.identity.extension, "XCI");
}

#[test]
fn update_only_folder_has_empty_identity_fields() {
    let dir = tempfile::tempdir().unwrap();
    build_library(dir.path());

    let entries = scan(dir.path(), &ScanOptions::default()).unwrap();
    let only = entry(&entries, "Update.Only");
    assert_eq!(only.identity.short_name, "");
    assert_eq!(only.identity.extension, "");
}

#[test]
fn legacy_policy_takes_the_last_qualifying_file() {
    let dir = tempfile::tempdir().unwrap();
    let game = dir.path().join("GameZ");
    fs::create_dir(&game).unwrap();
    fs::write(game.join("a-first.nsp"), b"").unwrap();
    fs::write(game.join("z-last.xci"), b"").unwrap();

    let first = scan(
        dir.path(),
        &ScanOptions {
            legacy_short_name: false,
        },
    )
    .unwrap();
    assert_eq!(first[0].identity.short_name, "a-first");

    let last = scan(
        dir.path(),
        &ScanOptions {
            legacy_short_name: true,
        },
    )
    .unwrap();
    assert_eq!(last[0].identity.short_name, "z-last");
}

#[test]
fn updates_merge_both_sources_and_sort_lexicographically() {
    let dir = tempfile::tempdir().unwrap();
    build_library(dir.path());

    let entries = scan(dir.path(), &ScanOptions::default()).unwrap();

    // Self-tag v1.0 plus the sibling folder v1.2.
    assert_eq!(entry(&entries, "GameX").updates, vec!["1.0", "1.2"]);

    // Plain string sort: "1.10" before "1.2".
    assert_eq!(
        entry(&entries, "Mario.Kart.8.Deluxe").updates,
        vec!["1.10", "1.2"]
    );
}

#[test]
fn malformed_update_folder_is_skipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let game = dir.path().join("Broken.Update.NoVersion");
    fs::create_dir(&game).unwrap();

    let entries = scan(dir.path(), &ScanOptions::default()).unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].updates.is_empty());
}

#[test]
fn dlcs_match_the_glob_pattern() {
    let dir = tempfile::tempdir().unwrap();
    build_library(dir.path());

    let entries = scan(dir.path(), &ScanOptions::default()).unwrap();
    let mut dlcs = entry(&entries, "GameX").dlcs.clone();
    dlcs.sort();
    assert_eq!(dlcs, vec!["GameX DLC Pack1", "GameX DLC Pack2"]);

    assert!(entry(&entries, "Mario.Kart.8.Deluxe").dlcs.is_empty());
}

#[test]
fn dlc_matching_is_case_sensitive() {
    let dir = tempfile::tempdir().unwrap();
    let game = dir.path().join("GameX");
    fs::create_dir(&game).unwrap();
    let shared = dir.path().join(scanner::SHARED_DIR_NAME);
    fs::create_dir(&shared).unwrap();
    fs::create_dir(shared.join("gamex dlc pack")).unwrap();

    let entries = scan(dir.path(), &ScanOptions::default()).unwrap();
    assert!(entries[0].dlcs.is_empty());
}

#[test]
fn missing_shared_dir_yields_no_updates_or_dlcs() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("Lonely.Game")).unwrap();

    let entries = scan(dir.path(), &ScanOptions::default()).unwrap();
    assert!(entries[0].updates.is_empty());
    assert!(entries[0].dlcs.is_empty());
}

#[test]
fn scan_of_a_file_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("not-a-dir");
    fs::write(&file, b"").unwrap();
    assert!(scan(&file, &ScanOptions::default()).is_err());
}

#[test]
fn export_writes_semicolon_rows_with_joined_lists() {
    let dir = tempfile::tempdir().unwrap();
    build_library(dir.path());

    let entries = scan(dir.path(), &ScanOptions::default()).unwrap();
    let out = dir.path().join("inventory.csv");
    write_inventory(&out, &entries).unwrap();

    let contents = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "game;short_name;extension;updates;dlcs");
    assert_eq!(lines[1], "GameX;gamex;NSP;1.0,1.2;GameX DLC Pack1,GameX DLC Pack2");
    assert_eq!(lines[2], "Mario.Kart.8.Deluxe;mk8d;XCI;1.10,1.2;");
    assert_eq!(lines[3], "Update.Only;;;;");
}
