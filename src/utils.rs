// src/utils.rs
use std::ffi::OsStr;
use std::path::Path;

/// Decodes ISO-8859-1 bytes. Every byte maps to the code point of the same
/// value, so this cannot fail.
#[must_use]
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Case-insensitive extension check. Paths without an extension never match.
#[must_use]
pub fn has_extension(path: &Path, expected: &str) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(expected))
}

/// Extension as shown in error messages, dot included (`.txt`), or an empty
/// string when there is none.
#[must_use]
pub fn display_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
