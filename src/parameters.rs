use std::collections::HashMap;

use crate::credentials::Credentials;
use crate::encoder::percent_encode_cow;
use crate::error::{Error, Result};
use crate::v1::values::*;

/// The `oauth_*` parameters of a single signing call.
///
/// Consumer key, token, method and version come from the signer; nonce and
/// timestamp are fresh for every call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtocolParameters {
    pub consumer_key: String,
    pub token: String,
    pub signature_method: &'static str,
    pub version: &'static str,
    pub nonce: String,
    pub timestamp: String,
}

impl ProtocolParameters {
    pub fn new(credentials: &Credentials, nonce: String, timestamp: String) -> Self {
        ProtocolParameters {
            consumer_key: credentials.consumer_key.clone(),
            token: credentials.oauth_token.clone(),
            signature_method: OAUTH_VALUE_SIGMETHOD_HMACSHA1,
            version: OAUTH_VALUE_VERSION,
            nonce,
            timestamp,
        }
    }

    /// Key/value pairs. `oauth_token` is present even when empty.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        vec![
            (OAUTH_PARAM_KEY_CONSUMER_KEY, self.consumer_key.as_str()),
            (OAUTH_PARAM_KEY_NONCE, self.nonce.as_str()),
            (OAUTH_PARAM_KEY_SIGNATURE_METHOD, self.signature_method),
            (OAUTH_PARAM_KEY_TIMESTAMP, self.timestamp.as_str()),
            (OAUTH_PARAM_KEY_TOKEN, self.token.as_str()),
            (OAUTH_PARAM_KEY_VERSION, self.version),
        ]
    }
}

/// Request parameters merged over protocol parameters, keys unique.
///
/// Keys and values are held raw; encoding happens once, in
/// [`CombinedParameters::canonicalize`] and when rendering the header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CombinedParameters {
    params: HashMap<String, String>,
}

impl CombinedParameters {
    pub fn merge<I, K, V>(
        request_params: I,
        protocol: &ProtocolParameters,
        policy: MergePolicy,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params: HashMap<String, String> = protocol
            .pairs()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        for (k, v) in request_params {
            let (k, v) = (k.into(), v.into());
            if k == OAUTH_PARAM_KEY_SIGNATURE {
                return Err(Error::ParameterConflict(k));
            }
            if policy == MergePolicy::Reject && params.contains_key(&k) {
                return Err(Error::ParameterConflict(k));
            }
            if let Some(old) = params.insert(k.clone(), v) {
                log::debug!("request parameter {} overrides protocol value {:?}", k, old);
            }
        }

        // nonce and timestamp are never taken from the caller
        for (k, v) in [
            (OAUTH_PARAM_KEY_NONCE, &protocol.nonce),
            (OAUTH_PARAM_KEY_TIMESTAMP, &protocol.timestamp),
        ] {
            params.insert(k.to_string(), v.clone());
        }
        Ok(CombinedParameters { params })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Entries whose key starts with `oauth_`, in no particular order.
    pub fn oauth_params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .filter(|(k, _)| k.starts_with(OAUTH_PARAM_PREFIX))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode every key and value, sort by encoded key and join with `=`
    /// and `&`.
    pub fn canonicalize(&self) -> String {
        encode_and_sort(self.params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<String>>()
            .join("&")
    }
}

/// Merge `request_params` over `protocol` and return the canonical
/// parameter string.
pub fn canonicalize<I, K, V>(
    request_params: I,
    protocol: &ProtocolParameters,
    policy: MergePolicy,
) -> Result<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    Ok(CombinedParameters::merge(request_params, protocol, policy)?.canonicalize())
}

/// Percent-encode each pair and sort byte-wise by the encoded key.
pub(crate) fn encode_and_sort<'a, I>(pairs: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut encoded = pairs
        .into_iter()
        .map(|(k, v)| {
            (
                percent_encode_cow(k).into_owned(),
                percent_encode_cow(v).into_owned(),
            )
        })
        .collect::<Vec<(String, String)>>();
    encoded.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    encoded
}
