//! AES-128-CBC with PKCS#7 padding.
//!
//! The wire protocol fixes the cipher: 16-byte key and IV used verbatim,
//! CBC mode, PKCS#7 padding. No nonce, no tag — tampering shows up as a
//! padding failure on decrypt, which is surfaced as [`CodecError::Cipher`].

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes128;

use crate::error::CodecError;
use crate::keys::{HashIv, HashKey};

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;

/// Encrypt `plaintext`, returning block-aligned ciphertext.
pub fn encrypt(key: &HashKey, iv: &HashIv, plaintext: &[u8]) -> Vec<u8> {
    Aes128CbcEnc::new(key.as_bytes().into(), iv.as_bytes().into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

/// Decrypt block-aligned ciphertext and strip the PKCS#7 padding.
///
/// Fails with [`CodecError::Cipher`] when the input is not a whole number of
/// blocks or the padding check fails (wrong key, wrong IV, or corruption).
pub fn decrypt(key: &HashKey, iv: &HashIv, ciphertext: &[u8]) -> Result<Vec<u8>, CodecError> {
    Aes128CbcDec::new(key.as_bytes().into(), iv.as_bytes().into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CodecError::Cipher)
}
