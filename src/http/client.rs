use std::time::Duration;

use log::{debug, error};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

use super::error::HttpError;
use super::types::{ClientOptions, ErrorPayload, Header, RequestOptions};

const HTTP_TIMEOUT_SECS: u64 = 30;

/// Outbound API client bound to a base URL and a base header set.
///
/// The configuration is immutable after construction and every call derives
/// a fresh header map, so one client can serve concurrent in-flight calls.
pub struct Client {
    base_url: Url,
    base_headers: Vec<Header>,
    inner: reqwest::Client,
}

impl Client {
    /// Builds a client from [`ClientOptions`].
    ///
    /// Base headers are validated here so a bad key/value surfaces at
    /// construction instead of on the first call.
    pub fn new(options: ClientOptions) -> Result<Self, HttpError> {
        build_header_map(&options.base_headers, &[])?;

        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url: options.base_url,
            base_headers: options.base_headers,
            inner,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Performs a GET against `base_url + options.path` and decodes the body
    /// into `T`.
    ///
    /// Per-call headers are layered on top of the base set additively;
    /// duplicate keys are all sent. Failure policy, in priority order:
    /// transport or decode failures are returned verbatim, then a non-empty
    /// embedded error list is returned as [`HttpError::Upstream`], otherwise
    /// the decoded body is the result.
    pub async fn get<T: DeserializeOwned>(&self, options: RequestOptions) -> Result<T, HttpError> {
        let url = self.base_url.join(&options.path)?;
        let headers = build_header_map(&self.base_headers, &options.add_headers)?;

        debug!(url:% = url; "sending GET request");

        let resp = match self.inner.get(url).headers(headers).send().await {
            Ok(resp) => resp,
            Err(e) => {
                error!(err:% = e; "request failed");
                return Err(e.into());
            },
        };

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".into());
            error!(status:% = status; "server returned error status");
            return Err(HttpError::Server { status, body });
        }

        let body = resp.text().await?;

        // Some backends report failures inside a 200 body; a reply whose
        // embedded error list is non-empty is not a success. A body that
        // does not fit the error shape counts as no embedded errors.
        let error_payload: ErrorPayload = serde_json::from_str(&body).unwrap_or_default();
        if let Some(first) = error_payload.errors.first() {
            error!(err:% = first.error; "error payload in response body");
            return Err(HttpError::Upstream {
                message: first.error.clone(),
                errors: error_payload.errors,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn build_header_map(base: &[Header], extra: &[Header]) -> Result<HeaderMap, HttpError> {
    let mut map = HeaderMap::new();
    for header in base.iter().chain(extra) {
        let name: HeaderName = header.key.parse()?;
        let value: HeaderValue = header.value.parse()?;
        // append, not insert: duplicate keys all survive
        map.append(name, value);
    }
    Ok(map)
}
