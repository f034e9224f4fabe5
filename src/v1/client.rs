use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Request;

use crate::error::{Error, Result};
use crate::util;
use crate::v1::{SignedContent, Signer};

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

impl Signer {
    /// Sign a `reqwest::Request` in place by setting its `Authorization`
    /// header.
    ///
    /// Query pairs are always signed. A buffered form body is signed too when
    /// the content type is `application/x-www-form-urlencoded`.
    pub fn sign_request(&self, request: &mut Request) -> Result<SignedContent> {
        let form = form_params(request);
        let signed = self.sign_url(request.method().as_str(), request.url(), form)?;
        let value = HeaderValue::from_str(&signed.header)
            .map_err(|e| Error::InvalidRequest(e.to_string()))?;
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(signed)
    }
}

fn form_params(request: &Request) -> Vec<(String, String)> {
    let is_form = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with(FORM_URLENCODED))
        .unwrap_or(false);
    if !is_form {
        return Vec::new();
    }
    match request.body().and_then(|b| b.as_bytes()) {
        Some(body) => util::form_bytes_to_params(body),
        None => {
            log::warn!("form body is streamed and cannot be included in the oauth signature");
            Vec::new()
        }
    }
}
