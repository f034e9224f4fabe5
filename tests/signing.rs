use std::io;

use oauthsign::v1::{hmac_sha1_signature, signature_base_string, signing_key};
use oauthsign::*;
use pretty_assertions::assert_eq;

// https://developer.twitter.com/en/docs/authentication/oauth-1-0a/creating-a-signature
const TWITTER_URL: &str = "https://api.twitter.com/1.1/statuses/update.json";
const TWITTER_NONCE: &str = "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg";
const TWITTER_TIMESTAMP: i64 = 1_318_622_958;

fn twitter_credentials() -> Credentials {
    Credentials::new(
        "xvz1evFS4wEEPTGEFPHBog",
        "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
        "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
        "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
    )
}

fn twitter_params() -> Vec<(&'static str, &'static str)> {
    vec![
        ("status", "Hello Ladies + Gentlemen, a signed OAuth request!"),
        ("include_entities", "true"),
    ]
}

#[test]
fn test_twitter_documentation_vector() {
    let signer = Signer::new(twitter_credentials())
        .unwrap()
        .with_nonce_source(FixedNonceSource::new(TWITTER_NONCE, TWITTER_TIMESTAMP));
    let signed = signer.sign("post", TWITTER_URL, twitter_params()).unwrap();
    assert_eq!(
        signed.base_string,
        "POST&https%3A%2F%2Fapi.twitter.com%2F1.1%2Fstatuses%2Fupdate.json&include_entities%3Dtrue\
         %26oauth_consumer_key%3Dxvz1evFS4wEEPTGEFPHBog\
         %26oauth_nonce%3DkYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg\
         %26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1318622958\
         %26oauth_token%3D370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb\
         %26oauth_version%3D1.0\
         %26status%3DHello%2520Ladies%2520%252B%2520Gentlemen%252C%2520a%2520signed%2520OAuth%2520request%2521"
    );
    assert_eq!(signed.signature, "hCtSmYh+iHYCEqBWrE7C7hYmtUk=");
    assert_eq!(
        signed.header,
        "OAuth oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\", \
         oauth_nonce=\"kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg\", \
         oauth_signature=\"hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D\", \
         oauth_signature_method=\"HMAC-SHA1\", \
         oauth_timestamp=\"1318622958\", \
         oauth_token=\"370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb\", \
         oauth_version=\"1.0\""
    );
}

#[test]
fn test_pipeline_from_primitives_matches_signer() {
    let creds = twitter_credentials();
    let protocol = ProtocolParameters::new(
        &creds,
        TWITTER_NONCE.to_string(),
        TWITTER_TIMESTAMP.to_string(),
    );
    let canonical = canonicalize(twitter_params(), &protocol, MergePolicy::Reject).unwrap();
    let base = signature_base_string("POST", TWITTER_URL, &canonical);
    let key = signing_key(&creds.consumer_secret, &creds.oauth_token_secret);
    assert_eq!(hmac_sha1_signature(&base, &key), "hCtSmYh+iHYCEqBWrE7C7hYmtUk=");
}

#[test]
fn test_unreserved_strings_are_unchanged() {
    let unreserved = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";
    assert_eq!(percent_encode(unreserved), unreserved);
}

struct BrokenEntropy;

impl NonceSource for BrokenEntropy {
    fn next_nonce(&self) -> Result<String> {
        let cause = io::Error::new(io::ErrorKind::Other, "entropy pool unavailable");
        Err(Error::Entropy(rand::Error::new(cause)))
    }

    fn current_timestamp(&self) -> String {
        "0".to_string()
    }
}

#[test]
fn test_entropy_failure_aborts_signing() {
    let signer = Signer::new(twitter_credentials())
        .unwrap()
        .with_nonce_source(BrokenEntropy);
    let err = signer
        .authorization_header("POST", TWITTER_URL, twitter_params())
        .unwrap_err();
    assert!(matches!(err, Error::Entropy(_)));
    assert!(err.is_fatal());
}

#[test]
fn test_credentials_file_to_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("credentials.json");
    std::fs::write(
        &path,
        r#"{"ConsumerKey":"CK","ConsumerSecret":"CS","OauthToken":"OT","OauthTokenSecret":"OTS"}"#,
    )
    .unwrap();
    let signer = Signer::new(Credentials::from_json_file(&path).unwrap())
        .unwrap()
        .with_nonce_source(FixedNonceSource::new("abc123==", 1_700_000_000));
    let header = signer
        .authorization_header(
            "GET",
            "https://api.example.com/1.1/search/tweets.json",
            [("q", "golang compiler")],
        )
        .unwrap();
    assert_eq!(
        header,
        "OAuth oauth_consumer_key=\"CK\", oauth_nonce=\"abc123%3D%3D\", \
         oauth_signature=\"sa36SR967pkvqHSVH2uJ0kxUkG4%3D\", \
         oauth_signature_method=\"HMAC-SHA1\", oauth_timestamp=\"1700000000\", \
         oauth_token=\"OT\", oauth_version=\"1.0\""
    );
}
