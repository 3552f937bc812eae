//! Version-token extraction from folder names.

/// Extract a version token: the run of digits and dots after a literal `v`.
///
/// The first occurrence wins when a name contains several `v...` runs. The
/// token is deliberately permissive — `1.2.10`, `1`, even a bare run of dots
/// all match; nothing validates semver shape. Update folders sort these
/// tokens as plain strings, so the token stays opaque here.
///
/// # Examples
///
/// ```
/// use switch_shelf_core::extract_version;
///
/// assert_eq!(extract_version("Some.Game.Update.v1.2.3"), Some("1.2.3"));
/// assert_eq!(extract_version("NoVersionHere"), None);
/// ```
pub fn extract_version(text: &str) -> Option<&str> {
    for (pos, _) in text.match_indices('v') {
        let rest = &text[pos + 1..];
        let token_len = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        if token_len > 0 {
            return Some(&rest[..token_len]);
        }
    }
    None
}
