//! einvoice-crypto — encrypted-payload codec for the ECPay B2C e-invoice API.
//!
//! Every request and response body on this API carries its business payload
//! in an encrypted `Data` field. The pipeline is fixed by the service:
//!
//! ```text
//! payload ──serde_json──▶ JSON text ──form-escape──▶ ASCII
//!         ──AES-128-CBC/PKCS#7──▶ ciphertext ──base64──▶ Data
//! ```
//!
//! Both directions are pure and stateless; key and IV come from the merchant
//! account and are used verbatim.
//!
//! # Modules
//! - `cipher` — AES-128-CBC encrypt/decrypt helpers
//! - `form`   — form-urlencoding of the JSON text
//! - `keys`   — `HashKey` / `HashIv` newtypes (zeroized on drop)
//! - `error`  — unified `CodecError`

pub mod cipher;
pub mod error;
pub mod form;
pub mod keys;

use base64::{engine::general_purpose, Engine as _};
use serde::Serialize;
use serde_json::Value;

pub use error::CodecError;
pub use keys::{HashIv, HashKey, KEY_LEN};

/// Encrypt a business payload into the envelope's `Data` string.
pub fn encrypt_payload<T: Serialize>(
    payload: &T,
    key: &HashKey,
    iv: &HashIv,
) -> Result<String, CodecError> {
    let json = serde_json::to_string(payload)?;
    let escaped = form::escape(&json);
    let ciphertext = cipher::encrypt(key, iv, escaped.as_bytes());
    Ok(general_purpose::STANDARD.encode(ciphertext))
}

/// Decrypt an envelope's `Data` string back into a JSON payload.
///
/// Each stage fails with its own [`CodecError`] kind so callers can tell a
/// malformed transmission (`Decode`) from a credential mismatch (`Cipher`)
/// from garbage plaintext (`Utf8`/`Parse`).
pub fn decrypt_payload(data: &str, key: &HashKey, iv: &HashIv) -> Result<Value, CodecError> {
    let ciphertext = general_purpose::STANDARD.decode(data)?;
    let plaintext = cipher::decrypt(key, iv, &ciphertext)?;
    let text = std::str::from_utf8(&plaintext)?;
    let json = form::unescape(text)?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_keys() -> (HashKey, HashIv) {
        (
            HashKey::from_str_key("ejCk326UnaZWKisg").unwrap(),
            HashIv::from_str_key("q9jcZX8Ib9LM8wYk").unwrap(),
        )
    }

    // Published sample vector for this merchant test key pair. Locks the
    // cipher mode, padding, encoding dialect, and base64 alphabet.
    const KNOWN_DATA: &str =
        "uvI4yrErM37XNQkXGAgRgJAgHn2t72jahaMZzYhWL1HmvH4WV18VJDP2i9pTbC+tby5nxVExLLFyAkbjbS2Dvg==";

    #[test]
    fn known_answer_encrypt() {
        let (key, iv) = test_keys();
        let payload = json!({"Name": "Test", "ID": "A123456789"});
        assert_eq!(encrypt_payload(&payload, &key, &iv).unwrap(), KNOWN_DATA);
    }

    #[test]
    fn known_answer_decrypt() {
        let (key, iv) = test_keys();
        let payload = decrypt_payload(KNOWN_DATA, &key, &iv).unwrap();
        assert_eq!(payload, json!({"Name": "Test", "ID": "A123456789"}));
    }

    #[test]
    fn roundtrip_nested_and_multibyte() {
        let (key, iv) = test_keys();
        let payload = json!({
            "MerchantID": "2000132",
            "RelateNumber": "PLEASE-0001",
            "CustomerName": "測試買受人 🧾",
            "Items": [
                {"ItemName": "珍珠奶茶", "ItemCount": 2, "ItemPrice": 60.5},
                {"ItemName": "emoji ☕", "ItemCount": 1, "ItemPrice": 120}
            ],
            "Null": null,
            "Flag": true
        });
        let data = encrypt_payload(&payload, &key, &iv).unwrap();
        assert_eq!(decrypt_payload(&data, &key, &iv).unwrap(), payload);
    }

    #[test]
    fn deterministic_and_payload_sensitive() {
        let (key, iv) = test_keys();
        let a = encrypt_payload(&json!({"A": 1}), &key, &iv).unwrap();
        let b = encrypt_payload(&json!({"A": 1}), &key, &iv).unwrap();
        let c = encrypt_payload(&json!({"A": 2}), &key, &iv).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn malformed_base64_is_decode_error() {
        let (key, iv) = test_keys();
        assert!(matches!(
            decrypt_payload("not*base64!", &key, &iv),
            Err(CodecError::Decode(_))
        ));
    }

    #[test]
    fn wrong_key_is_cipher_error() {
        let (_, iv) = test_keys();
        let wrong = HashKey::from_str_key("gsiKWZanU623kCje").unwrap();
        assert!(matches!(
            decrypt_payload(KNOWN_DATA, &wrong, &iv),
            Err(CodecError::Cipher)
        ));
    }

    #[test]
    fn truncated_ciphertext_is_cipher_error() {
        let (key, iv) = test_keys();
        // Drop the last block: still valid base64 after re-encoding, but the
        // padding check must fail.
        let ct = base64::engine::general_purpose::STANDARD
            .decode(KNOWN_DATA)
            .unwrap();
        let truncated =
            base64::engine::general_purpose::STANDARD.encode(&ct[..ct.len() - 16]);
        assert!(matches!(
            decrypt_payload(&truncated, &key, &iv),
            Err(CodecError::Cipher)
        ));
    }
}
