//! OAuth 1.0a request signing with HMAC-SHA1.
//!
//! ```no_run
//! use oauthsign::{Credentials, Signer};
//!
//! # fn main() -> oauthsign::Result<()> {
//! let signer = Signer::new(Credentials::from_json_file("credentials.json")?)?;
//! let header = signer.authorization_header(
//!     "GET",
//!     "https://api.twitter.com/1.1/search/tweets.json",
//!     [("q", "rust compiler")],
//! )?;
//! # let _ = header;
//! # Ok(())
//! # }
//! ```

pub mod credentials;
pub mod encoder;
pub mod error;
pub mod nonce;
pub mod parameters;
mod util;
pub mod v1;

pub use credentials::Credentials;
pub use encoder::{percent_encode, percent_encode_bytes};
pub use error::{Error, Result};
pub use nonce::{FixedNonceSource, NonceSource, SystemNonceSource};
pub use parameters::{canonicalize, CombinedParameters, ProtocolParameters};
pub use v1::values::MergePolicy;
pub use v1::{SignedContent, Signer};
