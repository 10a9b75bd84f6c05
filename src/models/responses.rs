use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response envelope shared by every endpoint
///
/// `meta` is always an object and `errors` always an array, so clients can
/// rely on all three keys being present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub meta: Map<String, Value>,
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            meta: Map::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_meta(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.meta.insert(key.to_string(), value.into());
        self
    }
}

impl ApiResponse<()> {
    pub fn failure<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data: None,
            meta: Map::new(),
            errors: messages
                .into_iter()
                .map(|message| ApiError { message: message.into() })
                .collect(),
        }
    }
}

/// Health check payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}
