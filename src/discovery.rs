//! Discovery capability consumed by the redirect flow.
//!
//! Resolving a user-supplied identifier into a provider endpoint involves
//! network fetches and document parsing, which this crate does not perform.
//! Callers supply that behaviour through [`Discoverer`] and this module
//! connects its result to the redirect builder.

use crate::error::{Error, Result};
use crate::params::QueryParameterBag;
use crate::redirect::RedirectTarget;

/// The outcome of discovering an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredEndpoint {
    /// Provider endpoint URL to redirect to
    pub op_endpoint: String,
    /// Identifier local to the provider, empty if none
    pub op_local_id: String,
    /// Claimed identifier, empty for provider (identifier-select) discovery
    pub claimed_id: String,
}

impl DiscoveredEndpoint {
    /// Creates a redirect target for this endpoint.
    pub fn redirect_target(&self, return_to: impl Into<String>) -> RedirectTarget {
        RedirectTarget::new(self.op_endpoint.as_str(), return_to)
            .local_id(self.op_local_id.as_str())
            .claimed_id(self.claimed_id.as_str())
    }
}

/// Resolves identifiers to provider endpoints.
///
/// Implemented for any `Fn(&str) -> Result<DiscoveredEndpoint, E>`, which is
/// convenient for tests and for wrapping an existing HTTP client.
///
/// # Examples
///
/// ```
/// use openid_rp::{redirect_url, DiscoveredEndpoint};
///
/// let discover = |_identifier: &str| -> Result<DiscoveredEndpoint, std::io::Error> {
///     Ok(DiscoveredEndpoint {
///         op_endpoint: "https://op.example.com/auth".to_string(),
///         op_local_id: String::new(),
///         claimed_id: String::new(),
///     })
/// };
///
/// let url = redirect_url("example.com", "https://rp.example.com/cb", "", &discover, None)
///     .unwrap();
/// assert!(url.starts_with("https://op.example.com/auth?"));
/// ```
pub trait Discoverer {
    /// Error reported when an identifier cannot be resolved.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Resolves `identifier` to a provider endpoint and identifiers.
    fn discover(&self, identifier: &str) -> std::result::Result<DiscoveredEndpoint, Self::Error>;
}

impl<F, E> Discoverer for F
where
    F: Fn(&str) -> std::result::Result<DiscoveredEndpoint, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn discover(&self, identifier: &str) -> std::result::Result<DiscoveredEndpoint, E> {
        self(identifier)
    }
}

/// Discovers `identifier` and builds the redirect URL for it.
///
/// # Errors
///
/// Returns [`Error::Discovery`] if the discoverer fails.
pub fn redirect_url<D: Discoverer + ?Sized>(
    identifier: &str,
    return_to: &str,
    realm: &str,
    discoverer: &D,
    extra: Option<&QueryParameterBag>,
) -> Result<String> {
    let endpoint = discoverer
        .discover(identifier)
        .map_err(|source| Error::Discovery {
            identifier: identifier.to_string(),
            source: Box::new(source),
        })?;

    let mut target = endpoint.redirect_target(return_to).realm(realm);
    if let Some(extra) = extra {
        target = target.extra_parameters(extra.clone());
    }
    Ok(target.to_url())
}
