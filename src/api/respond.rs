use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use serde::Serialize;
use serde_json::Value;

use super::envelope::{Envelope, Kind};

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Builds an envelope of the given kind around `payload` and converts it to
/// an HTTP response.
///
/// Payload encoding is the only fallible step. When it fails, the reply is
/// substituted with a minimal error envelope carrying the encoder's message
/// and sent with status 502; every successfully encoded envelope goes out
/// with status 200 regardless of kind.
pub fn respond<T: Serialize>(kind: Kind, msg: &str, code: i64, payload: &T) -> Response {
    match serde_json::to_value(payload) {
        Ok(value) => Envelope::new(kind, msg, code, value).into_response(),
        Err(e) => {
            error!(err:% = e; "payload failed to encode, substituting error envelope");
            let fallback = Envelope::err(e.to_string(), 0, Value::Null);
            (StatusCode::BAD_GATEWAY, Json(fallback)).into_response()
        },
    }
}

pub fn respond_ok<T: Serialize>(msg: &str, code: i64, payload: &T) -> Response {
    respond(Kind::Success, msg, code, payload)
}

pub fn respond_err<T: Serialize>(msg: &str, code: i64, payload: &T) -> Response {
    respond(Kind::Error, msg, code, payload)
}

pub fn respond_info<T: Serialize>(msg: &str, code: i64, payload: &T) -> Response {
    respond(Kind::Info, msg, code, payload)
}

pub fn respond_warn<T: Serialize>(msg: &str, code: i64, payload: &T) -> Response {
    respond(Kind::Warning, msg, code, payload)
}
