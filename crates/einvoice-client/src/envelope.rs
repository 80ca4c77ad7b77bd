//! On-wire JSON envelopes.
//!
//! The service sees only routing metadata plus the opaque encrypted `Data`
//! field:
//!   - outbound: merchant id, request timestamp, ciphertext
//!   - inbound:  numeric status (`TransCode`, 1 = success), message,
//!               optional ciphertext
//!
//! Field names on the wire are PascalCase and must match byte-for-byte.

use serde::{Deserialize, Serialize};

/// Request header carried in every outbound envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RqHeader {
    /// Send time in epoch seconds. The service rejects stale timestamps.
    #[serde(rename = "Timestamp")]
    pub timestamp: i64,
}

/// Outbound envelope wrapping an encrypted business payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundEnvelope {
    #[serde(rename = "MerchantID")]
    pub merchant_id: String,

    #[serde(rename = "RqHeader")]
    pub rq_header: RqHeader,

    /// Base64 ciphertext produced by the codec.
    #[serde(rename = "Data")]
    pub data: String,
}

impl OutboundEnvelope {
    pub fn new(merchant_id: impl Into<String>, timestamp: i64, data: String) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            rq_header: RqHeader { timestamp },
            data,
        }
    }
}

/// Inbound envelope. `Data` is absent when the service rejected the request
/// outright; some rejections still carry encrypted diagnostic data.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundEnvelope {
    #[serde(rename = "TransCode")]
    pub trans_code: i64,

    #[serde(rename = "TransMsg", default)]
    pub trans_msg: Option<String>,

    #[serde(rename = "Data", default)]
    pub data: Option<String>,
}

/// Sole success sentinel for `TransCode`.
pub const TRANS_CODE_SUCCESS: i64 = 1;
