//! Pure name and version inference for Switch game folder names.
//!
//! Folder names in a game library encode metadata in an informal convention:
//! ```text
//! The.Legend.of.Zelda.Breath.of.the.Wild.and.Update.v1.6.0
//! Splatoon.2.Update.v5.5.1
//! Octopath.Traveler.DLC.Pack
//! ```
//!
//! This crate turns those names into comparable identities: normalization,
//! canonical-name derivation, and version-token extraction. No I/O happens
//! here; the filesystem side lives in `switch-shelf-lib`.

pub mod name;
pub mod version;

pub use name::{canonical_name, normalize, normalized_key};
pub use version::extract_version;
