use crate::ns::{self, key};
use crate::params::QueryParameterBag;

/// Everything needed to send the user to the identity provider.
///
/// A target is built per authentication attempt and consumed to produce the
/// `checkid_setup` redirect URL. Empty strings passed to the optional setters
/// are treated as absent.
///
/// # Identity selection
///
/// - With a claimed identifier, `openid.claimed_id` is sent and
///   `openid.identity` is the local identifier, or identifier-select if there
///   is none.
/// - Without a claimed identifier, `openid.claimed_id` is omitted and
///   `openid.identity` is always identifier-select.
///
/// # Examples
///
/// ```
/// use openid_rp::ax::AttributeRequest;
/// use openid_rp::RedirectTarget;
///
/// let extension = AttributeRequest::new()
///     .required("email", "http://openid.net/schema/contact/internet/email")
///     .encode();
///
/// let url = RedirectTarget::new("https://op.example.com/auth", "https://rp.example.com/cb")
///     .realm("https://rp.example.com/")
///     .extra_parameters(extension)
///     .to_url();
///
/// assert!(url.starts_with("https://op.example.com/auth?"));
/// assert!(url.contains(
///     "openid.identity=http%3A%2F%2Fspecs.openid.net%2Fauth%2F2.0%2Fidentifier_select"
/// ));
/// assert!(url.contains("&openid.ax.mode=fetch_request"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    op_endpoint: String,
    op_local_id: Option<String>,
    claimed_id: Option<String>,
    return_to: String,
    realm: Option<String>,
    extra_parameters: Option<QueryParameterBag>,
}

impl RedirectTarget {
    /// Creates a target for the given provider endpoint and return-to URL.
    pub fn new(op_endpoint: impl Into<String>, return_to: impl Into<String>) -> Self {
        Self {
            op_endpoint: op_endpoint.into(),
            op_local_id: None,
            claimed_id: None,
            return_to: return_to.into(),
            realm: None,
            extra_parameters: None,
        }
    }

    /// Sets the provider-local identifier.
    pub fn local_id(mut self, op_local_id: impl Into<String>) -> Self {
        self.op_local_id = non_empty(op_local_id.into());
        self
    }

    /// Sets the claimed identifier.
    pub fn claimed_id(mut self, claimed_id: impl Into<String>) -> Self {
        self.claimed_id = non_empty(claimed_id.into());
        self
    }

    /// Sets the realm the user is asked to trust.
    pub fn realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = non_empty(realm.into());
        self
    }

    /// Sets extension parameters appended after the core parameters.
    ///
    /// An empty bag appends nothing.
    pub fn extra_parameters(mut self, params: QueryParameterBag) -> Self {
        self.extra_parameters = Some(params);
        self
    }

    /// Returns the provider endpoint.
    pub fn op_endpoint(&self) -> &str {
        &self.op_endpoint
    }

    /// Returns the return-to URL.
    pub fn return_to(&self) -> &str {
        &self.return_to
    }

    /// Assembles the redirect URL.
    pub fn to_url(&self) -> String {
        assemble(
            &self.op_endpoint,
            self.op_local_id.as_deref(),
            self.claimed_id.as_deref(),
            &self.return_to,
            self.realm.as_deref(),
            self.extra_parameters.as_ref(),
        )
    }
}

/// Assembles a `checkid_setup` redirect URL from its parts.
///
/// Empty `op_local_id`, `claimed_id` and `realm` are treated as absent. The
/// core parameters are joined to `op_endpoint` with `&` if it already has a
/// query, `?` otherwise; `extra` follows after a further `&`. An empty
/// `extra` bag is the same as `None` and appends nothing, so the URL never
/// ends in a dangling `&`.
///
/// # Examples
///
/// ```
/// use openid_rp::build_redirect_url;
///
/// let url = build_redirect_url(
///     "https://op.example.com/auth?foo=bar",
///     "",
///     "",
///     "https://rp.example.com/cb",
///     "",
///     None,
/// );
///
/// assert!(url.starts_with("https://op.example.com/auth?foo=bar&"));
/// assert!(!url.contains("openid.claimed_id"));
/// ```
pub fn build_redirect_url(
    op_endpoint: &str,
    op_local_id: &str,
    claimed_id: &str,
    return_to: &str,
    realm: &str,
    extra: Option<&QueryParameterBag>,
) -> String {
    assemble(
        op_endpoint,
        Some(op_local_id).filter(|s| !s.is_empty()),
        Some(claimed_id).filter(|s| !s.is_empty()),
        return_to,
        Some(realm).filter(|s| !s.is_empty()),
        extra,
    )
}

fn assemble(
    op_endpoint: &str,
    op_local_id: Option<&str>,
    claimed_id: Option<&str>,
    return_to: &str,
    realm: Option<&str>,
    extra: Option<&QueryParameterBag>,
) -> String {
    let mut params = QueryParameterBag::new();
    params.set(key::NS, ns::OPENID2);
    params.set(key::MODE, ns::mode::CHECKID_SETUP);
    params.set(key::RETURN_TO, return_to);

    let identity = match claimed_id {
        Some(claimed_id) => {
            params.set(key::CLAIMED_ID, claimed_id);
            op_local_id.unwrap_or(ns::IDENTIFIER_SELECT)
        }
        None => ns::IDENTIFIER_SELECT,
    };
    params.set(key::IDENTITY, identity);

    if let Some(realm) = realm {
        params.set(key::REALM, realm);
    }

    let separator = if op_endpoint.contains('?') { '&' } else { '?' };
    let mut url = format!("{op_endpoint}{separator}{}", params.encode());

    let extra = extra.filter(|extra| !extra.is_empty());
    if let Some(extra) = extra {
        url.push('&');
        url.push_str(&extra.encode());
    }

    tracing::debug!(
        target: "openid_rp",
        identifier_select = identity == ns::IDENTIFIER_SELECT,
        extra_parameters = extra.map_or(0, QueryParameterBag::len),
        "built checkid_setup redirect"
    );

    url
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
