//! OpenID 2.0 relying-party message construction.
//!
//! This crate covers the two protocol-level concerns of a relying party that
//! do not need the network:
//! - **Redirect URLs**: assembling the `checkid_setup` request that sends the
//!   user to their identity provider
//! - **Attribute Exchange 1.0**: encoding a `fetch_request` for user profile
//!   attributes and decoding the `fetch_response` from the callback URL
//!
//! Discovery, signature verification and nonce tracking are left to the
//! caller. Discovery plugs in through the [`Discoverer`] capability.
//!
//! # Core Types
//!
//! - [`QueryParameterBag`]: Multi-valued query parameters shared by every component
//! - [`ax::AttributeRequest`]: Builder for the attributes to fetch
//! - [`ax::AttributeResponse`]: Attribute values keyed by requested alias
//! - [`RedirectTarget`]: Builder for the authentication redirect
//!
//! # Examples
//!
//! ```
//! use openid_rp::ax::{self, schema, AttributeRequest};
//! use openid_rp::RedirectTarget;
//!
//! // Ask for the user's email alongside authentication
//! let fetch = AttributeRequest::new()
//!     .required("email", schema::CONTACT_EMAIL)
//!     .encode();
//!
//! let url = RedirectTarget::new("https://op.example.com/auth", "https://rp.example.com/cb")
//!     .extra_parameters(fetch)
//!     .to_url();
//! assert!(url.contains("openid.ax.required=email"));
//!
//! // Later, on the callback
//! let callback = "https://rp.example.com/cb\
//!                 ?openid.ns.ext0=http%3A%2F%2Fopenid.net%2Fsrv%2Fax%2F1.0\
//!                 &openid.ext0.mode=fetch_response\
//!                 &openid.ext0.value.email.1=alice%40example.com";
//! let attributes = ax::decode_response(callback).expect("valid response");
//! assert_eq!(attributes.get("email"), Some("alice@example.com"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ax;
mod discovery;
mod error;
pub mod ns;
mod params;
mod redirect;

#[cfg(test)]
mod test_utils;

pub use discovery::{redirect_url, DiscoveredEndpoint, Discoverer};
pub use error::{Error, ErrorKind, Result};
pub use params::QueryParameterBag;
pub use redirect::{build_redirect_url, RedirectTarget};
