use std::collections::BTreeMap;

use crate::ns::{self, ax_key};
use crate::params::QueryParameterBag;

/// A set of attributes to fetch from the identity provider.
///
/// Each attribute is identified by a caller-chosen alias mapped to its type
/// URI. The same alias is used to look the value up in the
/// [`AttributeResponse`](crate::ax::AttributeResponse).
///
/// Required attributes are applied before optional ones, so if both sets use
/// the same alias the optional type URI is the one declared on the wire.
///
/// # Examples
///
/// ```
/// use openid_rp::ax::{schema, AttributeRequest};
///
/// let params = AttributeRequest::new()
///     .required("email", schema::CONTACT_EMAIL)
///     .if_available("first", schema::NAME_PERSON_FIRST)
///     .if_available("last", schema::NAME_PERSON_LAST)
///     .encode();
///
/// assert_eq!(params.get("openid.ax.mode"), Some("fetch_request"));
/// assert_eq!(params.get("openid.ax.required"), Some("email"));
/// assert_eq!(params.get("openid.ax.if_available"), Some("first,last"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeRequest {
    required: BTreeMap<String, String>,
    optional: BTreeMap<String, String>,
}

impl AttributeRequest {
    /// Creates a request with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a request from required and optional `(alias, type URI)` sets.
    ///
    /// Pass an empty iterator for an absent set. A repeated alias within one
    /// set keeps its last type URI.
    pub fn from_sets<R, O, A, U, B, V>(required: R, optional: O) -> Self
    where
        R: IntoIterator<Item = (A, U)>,
        O: IntoIterator<Item = (B, V)>,
        A: Into<String>,
        U: Into<String>,
        B: Into<String>,
        V: Into<String>,
    {
        Self {
            required: required
                .into_iter()
                .map(|(alias, uri)| (alias.into(), uri.into()))
                .collect(),
            optional: optional
                .into_iter()
                .map(|(alias, uri)| (alias.into(), uri.into()))
                .collect(),
        }
    }

    /// Adds a required attribute.
    pub fn required(mut self, alias: impl Into<String>, type_uri: impl Into<String>) -> Self {
        self.required.insert(alias.into(), type_uri.into());
        self
    }

    /// Adds an attribute the provider may return if it has it.
    pub fn if_available(mut self, alias: impl Into<String>, type_uri: impl Into<String>) -> Self {
        self.optional.insert(alias.into(), type_uri.into());
        self
    }

    /// Returns `true` if no attribute has been requested.
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.optional.is_empty()
    }

    /// Encodes the request as `openid.ax.*` parameters.
    ///
    /// Emits the namespace declaration and `fetch_request` mode, one
    /// `openid.ax.type.<alias>` per alias, and the lexicographically sorted,
    /// comma-joined `openid.ax.required` / `openid.ax.if_available` lists.
    /// A list is omitted when its set is empty.
    pub fn encode(&self) -> QueryParameterBag {
        let mut params = QueryParameterBag::new();
        params.set(ax_key::NS, ns::AX);
        params.set(ax_key::MODE, ns::mode::FETCH_REQUEST);

        for (alias, type_uri) in self.required.iter().chain(&self.optional) {
            params.set(format!("{}{alias}", ax_key::TYPE_PREFIX), type_uri.as_str());
        }

        if let Some(list) = alias_list(&self.required) {
            params.set(ax_key::REQUIRED, list);
        }
        if let Some(list) = alias_list(&self.optional) {
            params.set(ax_key::IF_AVAILABLE, list);
        }

        tracing::debug!(
            target: "openid_rp",
            required = self.required.len(),
            optional = self.optional.len(),
            "encoded attribute exchange fetch request"
        );

        params
    }
}

/// Encodes required and optional `(alias, type URI)` sets as `openid.ax.*` parameters.
///
/// Shorthand for [`AttributeRequest::from_sets`] followed by
/// [`AttributeRequest::encode`].
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use openid_rp::ax::encode_request;
///
/// let required = HashMap::from([("one", "test:one")]);
/// let optional = HashMap::from([("two", "2"), ("three", "3")]);
///
/// let params = encode_request(required, optional);
/// assert_eq!(params.get("openid.ns.ax"), Some("http://openid.net/srv/ax/1.0"));
/// assert_eq!(params.get("openid.ax.type.one"), Some("test:one"));
/// assert_eq!(params.get("openid.ax.if_available"), Some("three,two"));
/// ```
pub fn encode_request<R, O, A, U, B, V>(required: R, optional: O) -> QueryParameterBag
where
    R: IntoIterator<Item = (A, U)>,
    O: IntoIterator<Item = (B, V)>,
    A: Into<String>,
    U: Into<String>,
    B: Into<String>,
    V: Into<String>,
{
    AttributeRequest::from_sets(required, optional).encode()
}

fn alias_list(set: &BTreeMap<String, String>) -> Option<String> {
    if set.is_empty() {
        return None;
    }
    // BTreeMap keys are already sorted and unique
    Some(set.keys().map(String::as_str).collect::<Vec<_>>().join(","))
}
