//! Standardized JSON response envelope with hypermedia action hints.
//!
//! Every reply from this layer is wrapped in an [`Envelope`] carrying the
//! outcome [`Kind`], a human-readable message, an application-level code, an
//! opaque payload and an ordered list of [`Action`] hints describing possible
//! follow-up calls.
//!
//! The HTTP status stays flat: every envelope goes out with 200 and the
//! semantics live in the `success`/`error`/`warning`/`type`/`code` fields.
//! The single exception is the payload-encoding fallback in [`respond`],
//! which answers 502 with a minimal error envelope so the sink always
//! receives valid JSON.

mod envelope;
mod respond;

pub use envelope::{Action, Envelope, Kind};
pub use respond::{respond, respond_err, respond_info, respond_ok, respond_warn};
