//! Name normalization and canonical-name derivation.
//!
//! Two naming worlds meet here: local folder names use `.` as a word
//! separator (`The.Legend.of.Zelda`), while the online patch table uses
//! human-readable titles (`The Legend of Zelda`, or the catalog form
//! `Legend of Zelda, The`). [`normalize`] maps both into the dotted form so
//! they can be compared; [`normalized_key`] adds case folding and is the join
//! key used everywhere two names are matched up.

/// Word separator in normalized names.
const SEPARATOR: char = '.';

/// Marker embedded in a folder name that denotes a bundled game+update
/// release (`Game.and.Update.v1.2` is the game `Game`, not a distinct title).
pub const BUNDLED_UPDATE_MARKER: &str = ".and.Update.";

/// Region/edition qualifiers stripped during normalization. The patch table
/// decorates some titles with these; local folder names never carry them.
const QUALIFIER_TAGS: &[&str] = &["(USA)", "(Europe)", "(Japan)", "(physical)", "(digital)"];

/// Normalize a raw folder name or human-readable title into the dotted,
/// comparable form.
///
/// Transformations, in order: spaces and colons become `.`; apostrophes and
/// exclamation marks are dropped; known region/edition qualifiers are
/// removed; separator runs are collapsed and trimmed; a trailing `, The` is
/// moved to the front.
///
/// Any input produces an output, and the function is idempotent.
///
/// # Examples
///
/// ```
/// use switch_shelf_core::normalize;
///
/// assert_eq!(normalize("Splatoon 2: Octo Expansion"), "Splatoon.2.Octo.Expansion");
/// assert_eq!(normalize("Legend of Zelda, The"), "The.Legend.of.Zelda");
/// assert_eq!(normalize("Luigi's Mansion 3 (Europe)"), "Luigis.Mansion.3");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut name: String = raw
        .chars()
        .map(|c| if c == ' ' || c == ':' { SEPARATOR } else { c })
        .filter(|c| *c != '\'' && *c != '!')
        .collect();

    for tag in QUALIFIER_TAGS {
        while let Some(pos) = name.find(tag) {
            name.replace_range(pos..pos + tag.len(), "");
        }
    }

    name = collapse_separators(&name);

    // Catalog-style "Foo, The" becomes "The.Foo". Looped so the output is a
    // fixed point even for pathological double-article names.
    let article_suffix = format!(",{SEPARATOR}The");
    while let Some(stem) = name.strip_suffix(&article_suffix) {
        name = format!("The{SEPARATOR}{stem}");
    }

    name
}

/// Case-folded normalized form, used as the join key between the local
/// inventory and the remote patch table. Name comparison is always
/// case-insensitive; this is the one place that rule is encoded.
pub fn normalized_key(raw: &str) -> String {
    normalize(raw).to_ascii_lowercase()
}

/// Derive the canonical game name from a folder's own name.
///
/// A folder named `GameX.and.Update.Something` is a bundled release of
/// `GameX`; everything from the marker onward is dropped. The marker search
/// is case-insensitive. Names without the marker pass through unchanged.
pub fn canonical_name(folder_name: &str) -> &str {
    match find_ignore_ascii_case(folder_name, BUNDLED_UPDATE_MARKER) {
        Some(pos) => &folder_name[..pos],
        None => folder_name,
    }
}

/// Byte offset of the first ASCII-case-insensitive occurrence of `needle`.
///
/// A match can only begin on an ASCII byte (the needles used here start with
/// `.`), so the returned offset is always a char boundary.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

/// Collapse separator runs and trim separators from both ends.
fn collapse_separators(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_sep = true; // swallows leading separators
    for c in name.chars() {
        if c == SEPARATOR {
            if !prev_sep {
                out.push(c);
            }
            prev_sep = true;
        } else {
            out.push(c);
            prev_sep = false;
        }
    }
    if out.ends_with(SEPARATOR) {
        out.pop();
    }
    out
}
