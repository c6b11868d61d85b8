use serde::Deserialize;
use url::Url;

/// One key/value pair attached to outbound requests. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Long-lived configuration for a [`Client`](super::Client).
///
/// `base_headers` are applied to every request, in sequence order, before
/// any per-call headers.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: Url,
    pub base_headers: Vec<Header>,
}

/// Per-call configuration: the path joined onto the base URL and the headers
/// layered on top of the base set for this call only.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub path: String,
    pub add_headers: Vec<Header>,
}

impl RequestOptions {
    pub fn path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            add_headers: Vec::new(),
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_headers.push(Header::new(key, value));
        self
    }
}

/// Error list some backends embed inside an otherwise successful (HTTP 200)
/// body. Every field defaults so partial bodies still decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub errors: Vec<ErrorEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorEntry {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub code: String,
}
