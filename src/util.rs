use url::{form_urlencoded, Url};

/// Split a URL into the base URL used in the signature (no query, no
/// fragment) and its decoded query pairs.
pub fn url_to_endpoint_and_queries(url: &Url) -> (String, Vec<(String, String)>) {
    let queries = url.query().map(query_to_params).unwrap_or_default();
    let mut endpoint = url.clone();
    endpoint.set_query(None);
    endpoint.set_fragment(None);
    (endpoint.into(), queries)
}

/// Decode an `application/x-www-form-urlencoded` string. Empty segments are
/// skipped; a segment without `=` gets an empty value.
pub fn query_to_params(query: &str) -> Vec<(String, String)> {
    form_bytes_to_params(query.trim_start_matches('?').as_bytes())
}

/// Decode a raw form body. Decoded bytes that are not UTF-8 are replaced,
/// the input itself is never re-encoded before parsing.
pub fn form_bytes_to_params(body: &[u8]) -> Vec<(String, String)> {
    form_urlencoded::parse(body).into_owned().collect()
}
