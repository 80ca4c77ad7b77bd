use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Cipher operation failed (wrong key/IV or corrupted ciphertext)")]
    Cipher,

    #[error("Decrypted payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Payload JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid key material: {0}")]
    InvalidKey(String),
}
