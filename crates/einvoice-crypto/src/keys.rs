//! Key material newtypes.
//!
//! The counterpart service hands out a 16-byte "HashKey" and "HashIV" per
//! merchant account, usually as ASCII strings. Both are used verbatim by the
//! cipher (no derivation), so the only validation is length.

use zeroize::Zeroize;

use crate::error::CodecError;

/// Cipher key and IV length in bytes (AES-128 block/key size).
pub const KEY_LEN: usize = 16;

/// Merchant hash key (128-bit AES key). Zeroized on drop.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct HashKey([u8; KEY_LEN]);

/// Merchant hash IV (CBC initialization vector). Zeroized on drop.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct HashIv([u8; KEY_LEN]);

macro_rules! key_impl {
    ($name:ident, $label:literal) => {
        impl $name {
            /// Create from raw bytes.
            pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
                Self(bytes)
            }

            /// Create from an ASCII string as issued by the merchant portal.
            pub fn from_str_key(s: &str) -> Result<Self, CodecError> {
                let bytes = s.as_bytes();
                if bytes.len() != KEY_LEN {
                    return Err(CodecError::InvalidKey(format!(
                        "{} must be {} bytes, got {}",
                        $label,
                        KEY_LEN,
                        bytes.len()
                    )));
                }
                let mut out = [0u8; KEY_LEN];
                out.copy_from_slice(bytes);
                Ok(Self(out))
            }

            /// Get inner bytes.
            pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
                &self.0
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                // Never print key material.
                write!(f, concat!($label, "(****)"))
            }
        }
    };
}

key_impl!(HashKey, "HashKey");
key_impl!(HashIv, "HashIv");
