//! einvoice-client — ECPay B2C e-invoice API client.
//!
//! Every endpoint on this API shares one call pattern: wrap the business
//! payload in an encrypted envelope (see `einvoice-crypto`), POST it, and
//! normalize the reply into exactly one of success, business rejection,
//! transport failure, or protocol failure. Endpoint methods are thin
//! adapters over [`Client::call`] and hold no logic of their own.
//!
//! ```no_run
//! use einvoice_client::{Client, Credentials, Environment};
//! use serde_json::json;
//!
//! # async fn demo() -> Result<(), einvoice_client::Error> {
//! let credentials = Credentials::from_str_keys(
//!     "2000132",
//!     "ejCk326UnaZWKisg",
//!     "q9jcZX8Ib9LM8wYk",
//!     Environment::Sandbox,
//! )?;
//! let client = Client::new(credentials);
//! let res = client.issue_invoice(&json!({"RelateNumber": "PLEASE-0001"})).await?;
//! println!("issued: {}", res.data);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//! - `client`    — orchestrator and endpoint adapters
//! - `config`    — credentials and environment selection
//! - `envelope`  — on-wire JSON envelopes
//! - `transport` — injectable HTTP capability (reqwest by default)
//! - `clock`     — injectable timestamp source
//! - `error`     — transport / protocol / business error taxonomy

pub mod client;
pub mod clock;
pub mod config;
pub mod envelope;
pub mod error;
pub mod transport;

pub use client::{Client, ClientBuilder, InvoiceResponse};
pub use clock::{epoch_from_datetime_str, Clock, FixedClock, SystemClock};
pub use config::{Credentials, Environment};
pub use envelope::{InboundEnvelope, OutboundEnvelope, TRANS_CODE_SUCCESS};
pub use error::{Error, ProtocolError, TransportError};
pub use transport::{HttpResponse, HttpTransport, Transport};
