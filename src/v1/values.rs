pub const OAUTH_HEADER: &str = "OAuth";
pub const OAUTH_PARAM_PREFIX: &str = "oauth_";

pub const OAUTH_PARAM_KEY_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_PARAM_KEY_NONCE: &str = "oauth_nonce";
pub const OAUTH_PARAM_KEY_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_PARAM_KEY_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_PARAM_KEY_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_PARAM_KEY_TOKEN: &str = "oauth_token";
pub const OAUTH_PARAM_KEY_VERSION: &str = "oauth_version";

pub const OAUTH_VALUE_VERSION: &str = "1.0";
pub const OAUTH_VALUE_SIGMETHOD_HMACSHA1: &str = "HMAC-SHA1";

/// Keys the signer itself places into every signature.
pub const PROTOCOL_PARAM_KEYS: [&str; 6] = [
    OAUTH_PARAM_KEY_CONSUMER_KEY,
    OAUTH_PARAM_KEY_NONCE,
    OAUTH_PARAM_KEY_SIGNATURE_METHOD,
    OAUTH_PARAM_KEY_TIMESTAMP,
    OAUTH_PARAM_KEY_TOKEN,
    OAUTH_PARAM_KEY_VERSION,
];

/// What happens when a request parameter shares its key with a protocol
/// parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MergePolicy {
    /// The request value replaces the protocol value.
    #[default]
    RequestOverrides,
    /// The signing call fails with `Error::ParameterConflict`.
    Reject,
}
