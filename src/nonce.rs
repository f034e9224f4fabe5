//! Per-signature nonce and timestamp generation.

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use chrono::Utc;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::Result;

/// Number of random bytes behind each nonce.
pub const NONCE_BYTES: usize = 32;

/// Produces the `oauth_nonce` and `oauth_timestamp` for one signing call.
///
/// Each is called exactly once per signature.
pub trait NonceSource: Send + Sync {
    fn next_nonce(&self) -> Result<String>;

    fn current_timestamp(&self) -> String;
}

/// Nonces from the operating system random source, timestamps from the
/// system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemNonceSource;

impl NonceSource for SystemNonceSource {
    fn next_nonce(&self) -> Result<String> {
        let mut raw = [0u8; NONCE_BYTES];
        OsRng.try_fill_bytes(&mut raw)?;
        Ok(BASE64_STANDARD.encode(raw))
    }

    fn current_timestamp(&self) -> String {
        Utc::now().timestamp().to_string()
    }
}

/// Always yields the same nonce and timestamp.
///
/// Useful for reproducing a signature computed elsewhere. Servers reject
/// replayed nonces, so do not use this for live traffic.
#[derive(Debug, Clone)]
pub struct FixedNonceSource {
    nonce: String,
    timestamp: String,
}

impl FixedNonceSource {
    pub fn new(nonce: impl Into<String>, timestamp: i64) -> Self {
        FixedNonceSource {
            nonce: nonce.into(),
            timestamp: timestamp.to_string(),
        }
    }
}

impl NonceSource for FixedNonceSource {
    fn next_nonce(&self) -> Result<String> {
        Ok(self.nonce.clone())
    }

    fn current_timestamp(&self) -> String {
        self.timestamp.clone()
    }
}
