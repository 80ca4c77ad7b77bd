use einvoice_crypto::CodecError;
use thiserror::Error;

/// Transport-level failure. The request never produced a usable reply;
/// retrying may help.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),
}

/// The reply arrived but could not be understood. Usually corruption or a
/// key/IV mismatch; retrying without fixing credentials will not help.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Invalid response body")]
    InvalidBody,

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Unified call failure.
///
/// `Business` means the service understood the request and rejected it —
/// distinct from `Protocol`, where the reply itself was unintelligible.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("Service rejected request (TransCode {trans_code}): {trans_msg}")]
    Business { trans_code: i64, trans_msg: String },
}

impl From<CodecError> for Error {
    fn from(err: CodecError) -> Self {
        Error::Protocol(ProtocolError::Codec(err))
    }
}
