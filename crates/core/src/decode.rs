//! Plain-text decoding for .txt uploads.

use crate::error::{Error, Result};

/// Decode a raw byte buffer as UTF-8 text.
///
/// Strips a leading byte-order mark if present and trims surrounding
/// whitespace. Fails with [`Error::DecodeError`] when the buffer is not
/// valid UTF-8 — unusual for user-supplied text files, but handled
/// rather than assumed.
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| Error::DecodeError(format!("not valid UTF-8: {}", e)))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_trims_whitespace() {
        let decoded = decode_text(b"  hello world \n").unwrap();
        assert_eq!(decoded, "hello world");
    }

    #[test]
    fn test_decode_round_trip_lossless_modulo_trim() {
        let original = "line one\n  line two\nline three";
        let decoded = decode_text(original.as_bytes()).unwrap();
        assert_eq!(decoded, original);
        assert_eq!(decoded.as_bytes(), original.as_bytes());
    }

    #[test]
    fn test_decode_strips_bom() {
        let decoded = decode_text("\u{feff}hello".as_bytes()).unwrap();
        assert_eq!(decoded, "hello");
    }

    #[test]
    fn test_decode_empty_is_ok() {
        assert_eq!(decode_text(b"   \n\t").unwrap(), "");
    }

    #[test]
    fn test_decode_invalid_utf8_fails() {
        let err = decode_text(&[0xff, 0xfe, 0x00, 0x41]).unwrap_err();
        assert!(matches!(err, Error::DecodeError(_)));
    }
}
