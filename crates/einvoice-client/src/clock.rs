//! Clock capability for the request timestamp.
//!
//! `RqHeader.Timestamp` always carries integer epoch seconds. The source is
//! injectable so tests can freeze it; callers that hold a pre-formatted
//! `YYYY-MM-DD HH:MM:SS` string feed the same field through
//! [`epoch_from_datetime_str`].

use chrono::{NaiveDateTime, ParseError, Utc};

pub trait Clock: Send + Sync {
    /// Current time in epoch seconds.
    fn now(&self) -> i64;
}

/// Live system clock (UTC).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Frozen clock for deterministic tests and pre-generated timestamps.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}

/// Convert a `YYYY-MM-DD HH:MM:SS` string (taken as UTC) to epoch seconds.
pub fn epoch_from_datetime_str(s: &str) -> Result<i64, ParseError> {
    let dt = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")?;
    Ok(dt.and_utc().timestamp())
}
