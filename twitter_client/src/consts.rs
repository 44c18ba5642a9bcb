pub const REST_API: &str = "https://api.twitter.com/1.1";
pub const USER_AGENT: &str = "fave/0.1";

pub const RATE_LIMIT_RESET_HEADER: &str = "x-rate-limit-reset";

pub const OAUTH_SIGNATURE_METHOD: &str = "HMAC-SHA1";
pub const OAUTH_VERSION: &str = "1.0";
pub const NONCE_LENGTH: usize = 32;
