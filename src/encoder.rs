use percent_encoding::{percent_encode as encode_with, utf8_percent_encode, AsciiSet};
use std::borrow::Cow;

// https://tools.ietf.org/html/rfc5849#section-3.6
// * ALPHA, DIGIT, '-', '.', '_', '~' MUST NOT be encoded.
// * All other characters MUST be encoded.
// * The two hexadecimal characters used to represent encoded
//   characters MUST be uppercase.
const TARGETS_FOR_PARAMS: &AsciiSet = &percent_encoding::NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string with the OAuth 1.0a unreserved set.
///
/// Each UTF-8 byte outside the unreserved set becomes `%XX` on its own.
/// Never call this on an already encoded value.
pub fn percent_encode(input: &str) -> String {
    percent_encode_cow(input).into_owned()
}

/// Byte-for-byte variant of [`percent_encode`] for input that is not valid UTF-8.
pub fn percent_encode_bytes(input: &[u8]) -> String {
    encode_with(input, TARGETS_FOR_PARAMS).to_string()
}

/// Borrows the input when nothing needs escaping.
pub(crate) fn percent_encode_cow(input: &str) -> Cow<'_, str> {
    Cow::from(utf8_percent_encode(input, TARGETS_FOR_PARAMS))
}
