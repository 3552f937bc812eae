//! Semicolon-delimited inventory export.

use std::path::Path;

use crate::error::InventoryError;
use crate::scanner::InventoryEntry;

/// Sub-delimiter for multi-valued cells (updates, dlcs) inside one field.
const LIST_DELIMITER: &str = ",";

/// Write the inventory to `path` as semicolon-delimited CSV with the header
/// `game;short_name;extension;updates;dlcs`. List-valued fields are joined
/// with [`LIST_DELIMITER`].
pub fn write_inventory(path: &Path, entries: &[InventoryEntry]) -> Result<(), InventoryError> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_path(path)?;
    writer.write_record(["game", "short_name", "extension", "updates", "dlcs"])?;

    for entry in entries {
        let updates = entry.updates.join(LIST_DELIMITER);
        let dlcs = entry.dlcs.join(LIST_DELIMITER);
        writer.write_record([
            entry.identity.name.as_str(),
            entry.identity.short_name.as_str(),
            entry.identity.extension.as_str(),
            updates.as_str(),
            dlcs.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
