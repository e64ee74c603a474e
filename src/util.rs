//! Bounded conversions for the fixed-width byte fields libbluray hands out.

/// Converts a fixed-width byte field to a `String`, stopping at the first
/// NUL or at the end of the slice, whichever comes first. Non-ASCII bytes
/// are replaced rather than trusted.
pub fn fixed_str(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

/// Extracts the three-letter language code from the library's 4-byte field.
///
/// The source field is not guaranteed to be NUL-terminated, so never read
/// more than three bytes from it.
pub fn lang_code(lang: &[u8; 4]) -> String {
    fixed_str(&lang[..3])
}
