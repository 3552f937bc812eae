//! Lenient parser for the patch-table HTML page.
//!
//! The page is hand-maintained HTML, not XML, so the reader runs with
//! end-name checking off and unknown entity references are kept literally.
//! Only the first `<tbody>` is read; rows are sequences of `<td>` cells.

use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use serde::Serialize;

use switch_shelf_core::normalized_key;

use crate::error::CatalogError;

/// One row of the patch table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchEntry {
    /// Game name as printed in the table.
    pub game: String,
    /// Latest known update label, free text (usually a version number).
    pub latest_update: String,
    /// Update date label, free text.
    pub update_date: String,
}

/// The parsed table, keyed by normalized, case-folded game name.
pub type PatchTable = HashMap<String, PatchEntry>;

/// Parse the patch-table page.
///
/// A row must have exactly four `<td>` cells: game name, latest update,
/// update date, and a trailing decorative cell that is discarded. Rows with
/// any other live-cell count are skipped with a warning naming the first
/// cell; a page without a `<tbody>` is an error.
pub fn parse_patch_table(html: &str) -> Result<PatchTable, CatalogError> {
    let mut reader = Reader::from_str(html);
    reader.config_mut().check_end_names = false;
    // Text is NOT trimmed at the reader level: a cell like "A &amp; B" is
    // split into fragments around the reference, and per-fragment trimming
    // would swallow the interior spaces. Cells are trimmed once, when closed.

    let mut table = PatchTable::new();
    let mut saw_tbody = false;
    let mut tbody_depth = 0u32;
    let mut cells: Vec<String> = Vec::new();
    let mut current_cell: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => match e.name().as_ref() {
                b"tbody" => {
                    saw_tbody = true;
                    tbody_depth += 1;
                }
                b"tr" if tbody_depth > 0 => {
                    cells.clear();
                    current_cell = None;
                }
                b"td" if tbody_depth > 0 => {
                    current_cell = Some(String::new());
                }
                _ => {}
            },
            Event::Empty(ref e) => {
                if e.name().as_ref() == b"td" && tbody_depth > 0 {
                    cells.push(String::new());
                }
            }
            Event::Text(ref e) => {
                if let Some(cell) = current_cell.as_mut() {
                    match e.decode() {
                        Ok(text) => cell.push_str(&text),
                        // Hand-written HTML can carry bare ampersands.
                        Err(_) => cell.push_str(&String::from_utf8_lossy(e.as_ref())),
                    }
                }
            }
            Event::GeneralRef(ref e) => {
                if let Some(cell) = current_cell.as_mut() {
                    cell.push_str(&resolve_reference(&String::from_utf8_lossy(e.as_ref())));
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"td" => {
                    if let Some(cell) = current_cell.take() {
                        cells.push(cell.trim().to_string());
                    }
                }
                b"tr" if tbody_depth > 0 => {
                    ingest_row(&mut table, &mut cells);
                }
                b"tbody" if tbody_depth > 0 => {
                    tbody_depth -= 1;
                    if tbody_depth == 0 {
                        // Only the primary table body is of interest.
                        break;
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_tbody {
        return Err(CatalogError::MissingTable);
    }

    Ok(table)
}

/// Validate one row's cells and fold it into the table.
fn ingest_row(table: &mut PatchTable, cells: &mut Vec<String>) {
    if cells.len() != 4 {
        let first = cells.first().map(String::as_str).unwrap_or("<empty row>");
        log::warn!(
            "Skipping malformed patch-table row ({} cells) starting with \"{first}\"",
            cells.len(),
        );
        cells.clear();
        return;
    }

    // The fourth cell is decorative and dropped.
    let update_date = cells.remove(2);
    let latest_update = cells.remove(1);
    let game = cells.remove(0);
    cells.clear();

    let key = normalized_key(&game);
    let entry = PatchEntry {
        game,
        latest_update,
        update_date,
    };
    if let Some(previous) = table.insert(key, entry) {
        log::debug!("Duplicate patch-table entry for \"{}\"; keeping the later row", previous.game);
    }
}

/// Resolve an HTML character or entity reference. Unknown entities are kept
/// literally; the labels are free text either way.
fn resolve_reference(name: &str) -> String {
    match name {
        "amp" => "&".to_string(),
        "lt" => "<".to_string(),
        "gt" => ">".to_string(),
        "quot" => "\"".to_string(),
        "apos" => "'".to_string(),
        "nbsp" => " ".to_string(),
        _ => {
            if let Some(digits) = name.strip_prefix('#') {
                let code = match digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
                    Some(hex) => u32::from_str_radix(hex, 16).ok(),
                    None => digits.parse::<u32>().ok(),
                };
                if let Some(c) = code.and_then(char::from_u32) {
                    return c.to_string();
                }
            }
            format!("&{name};")
        }
    }
}
