//! Job log decoding
//!
//! Logs arrive as raw bytes: usually UTF-8 behind a byte-order mark, but
//! nothing guarantees a step only printed valid UTF-8.

/// UTF-8 encoded byte-order mark
const BOM: char = '\u{feff}';

/// Decodes a downloaded log into text for rendering
///
/// Invalid sequences become U+FFFD and a leading byte-order mark is
/// dropped. The bytes themselves are left alone, so callers that keep the
/// raw log should save `bytes`, not the returned text.
pub fn decode_log(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    match text.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => text.into_owned(),
    }
}
