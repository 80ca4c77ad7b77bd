//! Merchant credentials and environment selection.

use einvoice_crypto::{CodecError, HashIv, HashKey};
use serde::{Deserialize, Serialize};

const SANDBOX_URL: &str = "https://einvoice-stage.ecpay.com.tw";
const PRODUCTION_URL: &str = "https://einvoice.ecpay.com.tw";

/// Target service environment. Picks one of two fixed base URLs; nothing
/// else differs between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Sandbox,
    Production,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_URL,
            Environment::Production => PRODUCTION_URL,
        }
    }
}

/// Per-merchant credentials. Immutable once constructed; the client borrows
/// them per call and never mutates them.
#[derive(Debug, Clone)]
pub struct Credentials {
    merchant_id: String,
    hash_key: HashKey,
    hash_iv: HashIv,
    environment: Environment,
}

impl Credentials {
    pub fn new(
        merchant_id: impl Into<String>,
        hash_key: HashKey,
        hash_iv: HashIv,
        environment: Environment,
    ) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            hash_key,
            hash_iv,
            environment,
        }
    }

    /// Convenience constructor from the ASCII key/IV strings shown in the
    /// merchant portal.
    pub fn from_str_keys(
        merchant_id: impl Into<String>,
        hash_key: &str,
        hash_iv: &str,
        environment: Environment,
    ) -> Result<Self, CodecError> {
        Ok(Self::new(
            merchant_id,
            HashKey::from_str_key(hash_key)?,
            HashIv::from_str_key(hash_iv)?,
            environment,
        ))
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    pub fn hash_key(&self) -> &HashKey {
        &self.hash_key
    }

    pub fn hash_iv(&self) -> &HashIv {
        &self.hash_iv
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn base_url(&self) -> &'static str {
        self.environment.base_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_selects_base_url() {
        assert_eq!(
            Environment::Sandbox.base_url(),
            "https://einvoice-stage.ecpay.com.tw"
        );
        assert_eq!(
            Environment::Production.base_url(),
            "https://einvoice.ecpay.com.tw"
        );
    }

    #[test]
    fn bad_key_length_rejected() {
        let res = Credentials::from_str_keys("2000132", "short", "q9jcZX8Ib9LM8wYk", Environment::Sandbox);
        assert!(res.is_err());
    }
}
