use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scanning or exporting the inventory.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// I/O error reading the games root or writing the export file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export failed
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// The configured games root does not point at a directory
    #[error("games root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
