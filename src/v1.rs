use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::encoder::percent_encode_cow;
use crate::parameters::encode_and_sort;

#[cfg(feature = "reqwest")]
mod client;
mod signer;
pub mod values;

pub use signer::{SignedContent, Signer};

type HmacSha1 = Hmac<Sha1>;

/// Build the signature base string.
///
/// `base_url` must carry no query or fragment, those belong in the
/// canonical parameter string.
pub fn signature_base_string(http_method: &str, base_url: &str, canonical_params: &str) -> String {
    format!(
        "{}&{}&{}",
        http_method,
        percent_encode_cow(base_url),
        percent_encode_cow(canonical_params)
    )
}

/// `encode(consumer_secret)&encode(token_secret)`, the separator is kept
/// even when the token secret is empty.
pub fn signing_key(consumer_secret: &str, token_secret: &str) -> String {
    format!(
        "{}&{}",
        percent_encode_cow(consumer_secret),
        percent_encode_cow(token_secret)
    )
}

/// Base64 (standard alphabet, padded) HMAC-SHA1 of `base` keyed by `key`.
pub fn hmac_sha1_signature(base: &str, key: &str) -> String {
    // NOTE: HMAC accepts keys of any length, so new_from_slice never fails.
    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).unwrap();
    mac.update(base.as_bytes());
    BASE64_STANDARD.encode(mac.finalize().into_bytes())
}

/// Render `OAuth k1="v1", k2="v2"` from raw pairs.
///
/// Pairs are encoded and sorted here; pass values exactly once, unencoded.
pub fn authorization_header<'a, I>(params: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let fields = encode_and_sort(params)
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, v))
        .collect::<Vec<String>>()
        .join(", ");
    format!("{} {}", values::OAUTH_HEADER, fields)
}
