//! Filesystem inventory of a Switch game library.
//!
//! A library root holds one folder per game plus one shared
//! `_DLC.and.Updates` folder whose entries belong to games by name-prefix.
//! [`scan`] walks the root and produces one [`InventoryEntry`] per game:
//! identity, applied update versions, and available DLC packages. The
//! inventory can be exported as semicolon-delimited CSV and reconciled
//! against the online patch table.

pub mod error;
pub mod export;
pub mod reconcile;
pub mod scanner;
pub mod settings;

pub use error::InventoryError;
pub use export::write_inventory;
pub use reconcile::unmatched_games;
pub use scanner::{GameIdentity, InventoryEntry, ScanOptions, scan};
