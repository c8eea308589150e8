//! Character decoding with encoding fallback.
//!
//! Government CSV exports arrive in a mix of UTF-8 and legacy single-byte
//! encodings. Strict UTF-8 is tried first; anything that fails decodes as
//! windows-1252, which per the WHATWG encoding standard also covers the
//! ISO-8859-1 labels these files are tagged with in practice.

use encoding_rs::WINDOWS_1252;

/// Decodes raw file bytes into text, never failing.
pub fn decode_text(bytes: &[u8]) -> String {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_passes_through() {
        assert_eq!(decode_text("City,Vehicles".as_bytes()), "City,Vehicles");
    }

    #[test]
    fn latin1_bytes_fall_back() {
        // "Café" encoded as ISO-8859-1 / windows-1252.
        let bytes = b"Caf\xe9";
        assert_eq!(decode_text(bytes), "Café");
    }

    #[test]
    fn windows_1252_punctuation_decodes() {
        // 0x96 is an en dash in windows-1252.
        let bytes = b"0\x963 hrs";
        assert_eq!(decode_text(bytes), "0\u{2013}3 hrs");
    }
}
