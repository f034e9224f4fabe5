use std::fmt;
use std::iter;
use std::sync::Arc;

use url::Url;

use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::nonce::{NonceSource, SystemNonceSource};
use crate::parameters::{CombinedParameters, ProtocolParameters};
use crate::util;
use crate::v1::values::*;
use crate::v1::{authorization_header, hmac_sha1_signature, signature_base_string, signing_key};

/// Contents signed with OAuth 1.0a.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedContent {
    /// Base64 HMAC-SHA1 signature, not percent-encoded.
    pub signature: String,
    pub nonce: String,
    pub timestamp: String,
    pub base_string: String,
    /// Value for the `Authorization` header.
    pub header: String,
}

/// Signs requests with one set of credentials.
///
/// Nonce and timestamp are generated per call and returned in
/// [`SignedContent`], the signer holds no per-request state and can be shared
/// between threads.
#[derive(Clone)]
pub struct Signer {
    credentials: Credentials,
    signing_key: String,
    nonce_source: Arc<dyn NonceSource>,
    merge_policy: MergePolicy,
}

impl Signer {
    pub fn new(credentials: Credentials) -> Result<Self> {
        credentials.validate()?;
        let signing_key = signing_key(
            &credentials.consumer_secret,
            &credentials.oauth_token_secret,
        );
        Ok(Signer {
            credentials,
            signing_key,
            nonce_source: Arc::new(SystemNonceSource),
            merge_policy: MergePolicy::default(),
        })
    }

    pub fn with_nonce_source(mut self, source: impl NonceSource + 'static) -> Self {
        self.nonce_source = Arc::new(source);
        self
    }

    pub fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
        self.merge_policy = policy;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn merge_policy(&self) -> MergePolicy {
        self.merge_policy
    }

    /// Sign a request.
    ///
    /// # Parameters
    /// - http_method: HTTP method, ex)"GET", "post", upper-cased before use.
    /// - base_url: scheme, authority and path only.
    /// - params: query and form parameters, not encoded.
    pub fn sign<I, K, V>(&self, http_method: &str, base_url: &str, params: I) -> Result<SignedContent>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let http_method = normalize_method(http_method)?;
        check_base_url(base_url)?;
        log::debug!("signing oauth request: {} {}", http_method, base_url);

        let nonce = self.nonce_source.next_nonce()?;
        let timestamp = self.nonce_source.current_timestamp();
        let protocol = ProtocolParameters::new(&self.credentials, nonce, timestamp);
        let combined = CombinedParameters::merge(params, &protocol, self.merge_policy)?;

        let base_string = signature_base_string(&http_method, base_url, &combined.canonicalize());
        log::trace!("oauth signature base string: {}", base_string);
        let signature = hmac_sha1_signature(&base_string, &self.signing_key);

        let header = authorization_header(
            combined
                .oauth_params()
                .chain(iter::once((OAUTH_PARAM_KEY_SIGNATURE, signature.as_str()))),
        );
        Ok(SignedContent {
            nonce: combined
                .get(OAUTH_PARAM_KEY_NONCE)
                .unwrap_or_default()
                .to_string(),
            timestamp: combined
                .get(OAUTH_PARAM_KEY_TIMESTAMP)
                .unwrap_or_default()
                .to_string(),
            signature,
            base_string,
            header,
        })
    }

    /// Sign and return only the `Authorization` header value.
    pub fn authorization_header<I, K, V>(
        &self,
        http_method: &str,
        base_url: &str,
        params: I,
    ) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Ok(self.sign(http_method, base_url, params)?.header)
    }

    /// Sign a full URL. Its query pairs are signed together with
    /// `extra_params` (form body values) against the URL stripped of query
    /// and fragment.
    pub fn sign_url<I, K, V>(
        &self,
        http_method: &str,
        url: &Url,
        extra_params: I,
    ) -> Result<SignedContent>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let (endpoint, queries) = util::url_to_endpoint_and_queries(url);
        let params = queries.into_iter().chain(
            extra_params
                .into_iter()
                .map(|(k, v)| (k.into(), v.into())),
        );
        self.sign(http_method, &endpoint, params)
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("credentials", &self.credentials)
            .field("merge_policy", &self.merge_policy)
            .finish_non_exhaustive()
    }
}

fn normalize_method(http_method: &str) -> Result<String> {
    if http_method.is_empty() || !http_method.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(Error::InvalidRequest(format!(
            "http method {:?} is not a valid method",
            http_method
        )));
    }
    Ok(http_method.to_ascii_uppercase())
}

fn check_base_url(base_url: &str) -> Result<()> {
    if base_url.is_empty() {
        return Err(Error::InvalidRequest("base url is empty".to_string()));
    }
    if base_url.contains(['?', '#']) {
        return Err(Error::InvalidRequest(format!(
            "base url {} must not carry a query or fragment",
            base_url
        )));
    }
    Ok(())
}
