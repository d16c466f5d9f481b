//! Attribute Exchange 1.0 extension support.
//!
//! This module provides:
//! - `AttributeRequest`: builder for the `fetch_request` parameters sent with
//!   the authentication redirect
//! - `AttributeResponse`: attribute values decoded from a `fetch_response`
//! - `schema`: well-known attribute type URIs
//!
//! Multi-valued attributes (the `count` mechanism) are not requested. When a
//! provider answers in indexed form anyway, only the first value is kept.

mod request;
mod response;
pub mod schema;

pub use request::{encode_request, AttributeRequest};
pub use response::{decode_response, AttributeResponse};
