use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Body of a successful like call. The platform reports per-tweet failures
/// as `errors` entries inside a success response; other body fields are
/// ignored.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LikeResponse {
    #[serde(default)]
    pub errors: Vec<ResponseError>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ResponseError {
    pub code: Option<i32>,
    pub message: String,
}

impl Display for ResponseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (code {})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}
