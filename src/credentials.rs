use serde::Deserialize;
use std::{env, fmt, fs, path::Path};

use crate::error::{Error, Result};

pub const OAUTH_CONSUMER_KEY: &str = "OAUTH_CONSUMER_KEY";
pub const OAUTH_CONSUMER_SECRET: &str = "OAUTH_CONSUMER_SECRET";
pub const OAUTH_TOKEN: &str = "OAUTH_TOKEN";
pub const OAUTH_TOKEN_SECRET: &str = "OAUTH_TOKEN_SECRET";

/// Long-lived consumer and token credentials.
///
/// The token pair may be empty for requests made before user authorization.
/// The JSON form uses `ConsumerKey`, `ConsumerSecret`, `OauthToken` and
/// `OauthTokenSecret`.
#[derive(Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    #[serde(default)]
    pub oauth_token: String,
    #[serde(default)]
    pub oauth_token_secret: String,
}

impl Credentials {
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        oauth_token: impl Into<String>,
        oauth_token_secret: impl Into<String>,
    ) -> Self {
        Credentials {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            oauth_token: oauth_token.into(),
            oauth_token_secret: oauth_token_secret.into(),
        }
    }

    /// Consumer credentials only.
    pub fn consumer(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Credentials::new(consumer_key, consumer_secret, "", "")
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let creds: Credentials = serde_json::from_str(content)?;
        creds.validate()?;
        Ok(creds)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading oauth credentials from {}", path.display());
        let content = fs::read_to_string(path)?;
        Credentials::from_json_str(&content)
    }

    /// Read credentials from `OAUTH_CONSUMER_KEY`, `OAUTH_CONSUMER_SECRET`,
    /// `OAUTH_TOKEN` and `OAUTH_TOKEN_SECRET`.
    pub fn from_env() -> Result<Self> {
        let var = |name: &str| env::var(name).unwrap_or_default();
        let creds = Credentials::new(
            var(OAUTH_CONSUMER_KEY),
            var(OAUTH_CONSUMER_SECRET),
            var(OAUTH_TOKEN),
            var(OAUTH_TOKEN_SECRET),
        );
        creds.validate()?;
        Ok(creds)
    }

    /// Consumer key and secret are mandatory. A token secret without a token
    /// is rejected, the reverse is allowed.
    pub fn validate(&self) -> Result<()> {
        if self.consumer_key.is_empty() {
            return Err(Error::MissingCredential("consumer_key"));
        }
        if self.consumer_secret.is_empty() {
            return Err(Error::MissingCredential("consumer_secret"));
        }
        if self.oauth_token.is_empty() && !self.oauth_token_secret.is_empty() {
            return Err(Error::MissingCredential("oauth_token"));
        }
        Ok(())
    }

    pub fn has_token(&self) -> bool {
        !self.oauth_token.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("oauth_token", &self.oauth_token)
            .field("oauth_token_secret", &"<redacted>")
            .finish()
    }
}
