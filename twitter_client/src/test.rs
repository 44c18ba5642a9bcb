use reqwest::Url;

use crate::response::LikeResponse;
use crate::{oauth, Credentials, Error};

/// Keys from the platform's published "Creating a signature" worked example.
fn example_credentials() -> Credentials {
    Credentials {
        consumer_key: "xvz1evFS4wEEPTGEFPHBog".to_string(),
        consumer_secret: "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw".to_string(),
        access_token: "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb".to_string(),
        access_token_secret: "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE".to_string(),
    }
}

#[test]
fn test_signature_matches_documented_example() {
    let url = Url::parse_with_params(
        "https://api.twitter.com/1/statuses/update.json",
        [
            ("include_entities", "true"),
            ("status", "Hello Ladies + Gentlemen, a signed OAuth request!"),
        ],
    )
    .unwrap();
    let header = oauth::sign(
        "POST",
        &url,
        &example_credentials(),
        "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg",
        "1318622958",
    );
    assert!(header.starts_with("OAuth "));
    assert!(header.contains(r#"oauth_signature="tnnArxj06cWHq44gCs1OSKk%2FjLY%3D""#));
    assert!(header.contains(r#"oauth_signature_method="HMAC-SHA1""#));
    assert!(header.contains(r#"oauth_version="1.0""#));
}

#[test]
fn test_percent_encoding_unreserved_set() {
    assert_eq!(oauth::encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
    assert_eq!(oauth::encode("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
    assert_eq!(oauth::encode("tnnArxj06cWHq44gCs1OSKk/jLY="), "tnnArxj06cWHq44gCs1OSKk%2FjLY%3D");
}

#[test]
fn test_parse_like_response_without_errors() {
    let response: LikeResponse = serde_json::from_str(r#"{"id": 42, "favorited": true}"#).unwrap();
    assert!(response.errors.is_empty());
}

#[test]
fn test_parse_like_response_with_errors() {
    let content = r#"{"errors": [{"code": 139, "message": "You have already favorited this status."}]}"#;
    let response: LikeResponse = serde_json::from_str(content).unwrap();
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].code, Some(139));
    assert_eq!(
        response.errors[0].to_string(),
        "You have already favorited this status. (code 139)"
    );
}

#[test]
fn test_parse_error_entry_without_code() {
    let content = r#"{"errors": [{"message": "Forbidden."}]}"#;
    let response: LikeResponse = serde_json::from_str(content).unwrap();
    assert_eq!(response.errors[0].code, None);
    assert_eq!(response.errors[0].to_string(), "Forbidden.");
}

#[test]
fn test_credentials_from_env() {
    // Single test owns these variables to keep env mutation race-free.
    std::env::set_var("CONSUMER_KEY", "ck");
    std::env::set_var("CONSUMER_SECRET", "cs");
    std::env::set_var("ACCESS_TOKEN", "at");
    std::env::set_var("ACCESS_TOKEN_SECRET", "ats");
    let credentials = Credentials::from_env().unwrap();
    assert_eq!(credentials.consumer_key, "ck");
    assert_eq!(credentials.access_token_secret, "ats");

    std::env::remove_var("ACCESS_TOKEN_SECRET");
    let result = Credentials::from_env();
    assert!(matches!(result, Err(Error::MissingCredential(name)) if name == "ACCESS_TOKEN_SECRET"));
}

#[test]
fn test_retryable_classification() {
    use reqwest::StatusCode;
    assert!(Error::ServerError(StatusCode::INTERNAL_SERVER_ERROR).retryable());
    assert!(Error::ServerError(StatusCode::SERVICE_UNAVAILABLE).retryable());
    assert!(!Error::RateLimit { reset: 0 }.retryable());
    assert!(!Error::MissingCredential("CONSUMER_KEY".to_string()).retryable());
}
