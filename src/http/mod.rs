//! Outbound HTTP client facade.
//!
//! A [`Client`] is bound to a base URL and a base header set at construction
//! ([`ClientOptions`]) and performs GET requests against relative paths
//! ([`RequestOptions`]), layering per-call headers on top of the base set
//! without mutating it.
//!
//! Two independent failure sources are merged into the single [`HttpError`]
//! channel: transport-level failures (network errors, non-2xx statuses,
//! malformed bodies) and GraphQL-style error lists embedded in otherwise
//! successful bodies. A reply is only a success when the transport succeeded
//! *and* the embedded error list is empty.
//!
//! # Example
//!
//! ```rust,no_run
//! use apikit::http::{Client, ClientOptions, Header, RequestOptions};
//!
//! # async fn example() -> Result<(), apikit::HttpError> {
//! let client = Client::new(ClientOptions {
//!     base_url: "http://localhost:8080/".parse().unwrap(),
//!     base_headers: vec![Header::new("X-Api-Key", "secret")],
//! })?;
//!
//! let balance: serde_json::Value = client
//!     .get(RequestOptions::path("v1/balance").header("X-Request-Id", "abc"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod types;

pub use client::Client;
pub use error::HttpError;
pub use types::{ClientOptions, ErrorEntry, ErrorPayload, Header, RequestOptions};
