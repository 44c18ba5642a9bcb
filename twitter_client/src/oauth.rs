//! OAuth 1.0a request signing (RFC 5849, HMAC-SHA1).

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::Url;
use sha1::Sha1;

use crate::consts::{NONCE_LENGTH, OAUTH_SIGNATURE_METHOD, OAUTH_VERSION};
use crate::Credentials;

/// Build the `Authorization: OAuth ...` header value for a request.
///
/// Query parameters are read back from `url` so the signature covers exactly
/// what goes on the wire.
pub(crate) fn authorization_header(method: &str, url: &Url, credentials: &Credentials) -> String {
    let timestamp = chrono::Utc::now().timestamp().to_string();
    let nonce: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect();
    sign(method, url, credentials, &nonce, &timestamp)
}

pub(crate) fn sign(method: &str, url: &Url, credentials: &Credentials, nonce: &str, timestamp: &str) -> String {
    let oauth_params = [
        ("oauth_consumer_key", credentials.consumer_key.as_str()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", OAUTH_SIGNATURE_METHOD),
        ("oauth_timestamp", timestamp),
        ("oauth_token", credentials.access_token.as_str()),
        ("oauth_version", OAUTH_VERSION),
    ];

    // Parameter string: every request and protocol parameter except the
    // signature itself, percent-encoded and sorted by encoded key.
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (encode(&k), encode(&v)))
        .chain(oauth_params.iter().map(|(k, v)| (encode(k), encode(v))))
        .collect();
    pairs.sort();
    let param_string = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let mut base_url = url.clone();
    base_url.set_query(None);
    base_url.set_fragment(None);
    let base_string = format!("{}&{}&{}", method, encode(base_url.as_str()), encode(&param_string));

    let signing_key = format!(
        "{}&{}",
        encode(&credentials.consumer_secret),
        encode(&credentials.access_token_secret)
    );
    let mut mac = Hmac::<Sha1>::new_from_slice(signing_key.as_bytes()).expect("HMAC accepts any key length");
    mac.update(base_string.as_bytes());
    let signature = BASE64.encode(mac.finalize().into_bytes());

    let mut header_params: Vec<(&str, &str)> = oauth_params.to_vec();
    header_params.push(("oauth_signature", &signature));
    header_params.sort();
    let fields = header_params
        .iter()
        .map(|(k, v)| format!(r#"{}="{}""#, k, encode(v)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("OAuth {}", fields)
}

/// Percent-encoding with the RFC 3986 unreserved set, as OAuth requires.
pub(crate) fn encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}
