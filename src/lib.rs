pub mod api;
pub mod config;
pub mod http;

pub use crate::api::{Action, Envelope, Kind};
pub use crate::config::load_client_options;
pub use crate::http::{Client, ClientOptions, Header, HttpError, RequestOptions};
