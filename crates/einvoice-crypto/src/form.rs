//! Form-urlencoding of the payload JSON text.
//!
//! The counterpart service percent-encodes the JSON before encryption (the
//! protocol predates the JSON envelope, when payloads went over the wire
//! form-encoded). The exact dialect matters for interoperability: uppercase
//! hex digits, `-._~` left bare, space encoded as `+`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::CodecError;

/// Everything outside `[A-Za-z0-9-._~ ]` gets percent-encoded; space is
/// handled separately as `+`.
const FORM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b' ');

/// Percent-encode `text` into a pure-ASCII form-urlencoded string.
pub fn escape(text: &str) -> String {
    utf8_percent_encode(text, FORM).to_string().replace(' ', "+")
}

/// Invert [`escape`]. Fails with [`CodecError::Utf8`] if the percent escapes
/// do not decode to valid UTF-8.
pub fn unescape(text: &str) -> Result<String, CodecError> {
    let spaced = text.replace('+', " ");
    let decoded = percent_decode_str(&spaced).decode_utf8()?;
    Ok(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_json_punctuation_uppercase() {
        assert_eq!(
            escape(r#"{"Name":"Test"}"#),
            "%7B%22Name%22%3A%22Test%22%7D"
        );
    }

    #[test]
    fn space_becomes_plus() {
        assert_eq!(escape("a b"), "a+b");
        assert_eq!(unescape("a+b").unwrap(), "a b");
    }

    #[test]
    fn multibyte_roundtrip() {
        for text in ["中文發票", "emoji 🧾", "mixed 中 e"] {
            assert_eq!(unescape(&escape(text)).unwrap(), text);
        }
    }

    #[test]
    fn literal_plus_survives() {
        // '+' in the input must encode as %2B so decoding is unambiguous.
        assert_eq!(escape("1+1"), "1%2B1");
        assert_eq!(unescape("1%2B1").unwrap(), "1+1");
    }

    #[test]
    fn invalid_utf8_escape_rejected() {
        assert!(matches!(unescape("%FF%FE"), Err(CodecError::Utf8(_))));
    }
}
