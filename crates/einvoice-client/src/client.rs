//! The request orchestrator: one shared call pattern, thin endpoint adapters.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use tracing::{debug, warn};

use einvoice_crypto::{decrypt_payload, encrypt_payload};

use crate::clock::{Clock, SystemClock};
use crate::config::Credentials;
use crate::envelope::{InboundEnvelope, OutboundEnvelope, TRANS_CODE_SUCCESS};
use crate::error::{Error, ProtocolError, TransportError};
use crate::transport::{HttpTransport, Transport};

/// Decrypted reply from a successful transport round-trip that carried an
/// encrypted payload. `success` is true iff `trans_code` is the success
/// sentinel; the service sometimes encrypts diagnostic data alongside a
/// failure code, which still lands here with `success == false`.
#[derive(Debug, Clone)]
pub struct InvoiceResponse {
    pub success: bool,
    pub trans_code: i64,
    pub trans_msg: String,
    pub data: Value,
}

/// E-invoice API client. Immutable once built; cheap to clone and safe to
/// share across tasks — every call is an independent request/response cycle.
#[derive(Clone)]
pub struct Client {
    credentials: Credentials,
    transport: Arc<dyn Transport>,
    clock: Arc<dyn Clock>,
}

impl Client {
    /// Client with the default reqwest transport and live clock.
    pub fn new(credentials: Credentials) -> Self {
        Self::builder(credentials).build()
    }

    pub fn builder(credentials: Credentials) -> ClientBuilder {
        ClientBuilder {
            credentials,
            transport: None,
            clock: None,
            timeout: None,
        }
    }

    /// Issue a B2C invoice.
    pub async fn issue_invoice(&self, invoice_data: &Value) -> Result<InvoiceResponse, Error> {
        self.call("/B2CInvoice/Issue", invoice_data.clone()).await
    }

    /// Query the government track-number allocation for a given invoice year.
    /// The service requires the merchant id repeated inside the encrypted
    /// payload for this endpoint.
    pub async fn get_gov_invoice_word_setting(
        &self,
        invoice_year: &str,
    ) -> Result<InvoiceResponse, Error> {
        let payload = json!({
            "MerchantID": self.credentials.merchant_id(),
            "InvoiceYear": invoice_year,
        });
        self.call("/B2CInvoice/GetGovInvoiceWordSetting", payload)
            .await
    }

    /// Register a track-number range.
    pub async fn add_invoice_word_setting(
        &self,
        setting_data: &Value,
    ) -> Result<InvoiceResponse, Error> {
        self.call("/B2CInvoice/AddInvoiceWordSetting", setting_data.clone())
            .await
    }

    /// Enable, pause, or disable a registered track.
    pub async fn update_invoice_word_status(
        &self,
        track_id: &str,
        invoice_status: i64,
    ) -> Result<InvoiceResponse, Error> {
        let payload = json!({
            "TrackID": track_id,
            "InvoiceStatus": invoice_status,
        });
        self.call("/B2CInvoice/UpdateInvoiceWordStatus", payload)
            .await
    }

    /// Query registered tracks.
    pub async fn get_invoice_word_setting(
        &self,
        query_data: &Value,
    ) -> Result<InvoiceResponse, Error> {
        self.call("/B2CInvoice/GetInvoiceWordSetting", query_data.clone())
            .await
    }

    /// Fetch a print URL for an issued invoice.
    pub async fn get_invoice_print_url(
        &self,
        print_data: &Value,
    ) -> Result<InvoiceResponse, Error> {
        self.call("/B2CInvoice/InvoicePrint", print_data.clone())
            .await
    }

    /// Shared call pattern: wrap `payload` in an encrypted envelope, POST it
    /// to `path`, and normalize the reply.
    pub async fn call(
        &self,
        path: &str,
        payload: impl Into<Value>,
    ) -> Result<InvoiceResponse, Error> {
        let payload = payload.into();
        let data = encrypt_payload(
            &payload,
            self.credentials.hash_key(),
            self.credentials.hash_iv(),
        )?;
        let envelope = OutboundEnvelope::new(
            self.credentials.merchant_id(),
            self.clock.now(),
            data,
        );
        let body = serde_json::to_value(&envelope)
            .map_err(|e| Error::Protocol(ProtocolError::Codec(e.into())))?;

        let url = format!("{}{}", self.credentials.base_url(), path);
        debug!(%url, merchant_id = %self.credentials.merchant_id(), "sending request");

        let res = self.transport.post_json(&url, &body).await?;
        if !res.is_success() {
            warn!(status = res.status, %url, "transport error");
            return Err(Error::Transport(TransportError::Status(res.status)));
        }

        let inbound: InboundEnvelope = serde_json::from_slice(&res.body)
            .map_err(|_| Error::Protocol(ProtocolError::InvalidBody))?;
        debug!(trans_code = inbound.trans_code, has_data = inbound.data.is_some(), "reply received");

        match inbound.data {
            Some(ciphertext) => {
                let decrypted = decrypt_payload(
                    &ciphertext,
                    self.credentials.hash_key(),
                    self.credentials.hash_iv(),
                )
                .map_err(ProtocolError::Codec)?;
                Ok(InvoiceResponse {
                    success: inbound.trans_code == TRANS_CODE_SUCCESS,
                    trans_code: inbound.trans_code,
                    trans_msg: inbound.trans_msg.unwrap_or_default(),
                    data: decrypted,
                })
            }
            None => Err(Error::Business {
                trans_code: inbound.trans_code,
                trans_msg: inbound
                    .trans_msg
                    .unwrap_or_else(|| "Unknown error".to_string()),
            }),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

pub struct ClientBuilder {
    credentials: Credentials,
    transport: Option<Arc<dyn Transport>>,
    clock: Option<Arc<dyn Clock>>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Replace the HTTP transport (tests, custom stacks).
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the timestamp source (frozen clocks in tests).
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Timeout for the default transport. Ignored when a custom transport is
    /// supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Client {
        let transport = self.transport.unwrap_or_else(|| {
            Arc::new(match self.timeout {
                Some(t) => HttpTransport::new(t),
                None => HttpTransport::default(),
            })
        });
        Client {
            credentials: self.credentials,
            transport,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
        }
    }
}
