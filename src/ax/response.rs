use std::collections::btree_map::{self, BTreeMap};

use url::Url;

use crate::error::{Error, Result};
use crate::ns;
use crate::params::QueryParameterBag;

/// Base used to read the query of a callback given as a relative reference.
const PLACEHOLDER_BASE: &str = "http://relying-party.invalid/";

/// Attribute values returned by the provider, keyed by the requested alias.
///
/// # Examples
///
/// ```
/// use openid_rp::ax::decode_response;
///
/// let callback = "https://rp.example.com/cb\
///                 ?openid.ns.ext0=http%3A%2F%2Fopenid.net%2Fsrv%2Fax%2F1.0\
///                 &openid.ext0.mode=fetch_response\
///                 &openid.ext0.value.email=alice%40example.com";
///
/// let attributes = decode_response(callback).unwrap();
/// assert_eq!(attributes.get("email"), Some("alice@example.com"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeResponse {
    values: BTreeMap<String, String>,
}

impl AttributeResponse {
    /// Decodes the attributes carried by already-parsed callback parameters.
    ///
    /// The extension alias is whichever `openid.ns.<alias>` carries the
    /// Attribute Exchange namespace as its single value. Value keys of the form
    /// `openid.<alias>.value.<attr>` are taken as-is; indexed keys
    /// `openid.<alias>.value.<attr>.<n>` contribute only their first (`.1`)
    /// value. Keys are visited in lexicographic order and a later key
    /// overwrites an earlier one for the same attribute.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingNamespace`] if no alias declares the namespace
    /// - [`Error::AmbiguousNamespace`] if more than one alias declares it
    /// - [`Error::UnexpectedMode`] if `openid.<alias>.mode` is not exactly `fetch_response`
    pub fn from_params(params: &QueryParameterBag) -> Result<Self> {
        let alias = extension_alias(params)?;
        check_mode(params, alias)?;

        let prefix = format!("openid.{alias}.value.");
        let mut values = BTreeMap::new();
        for (key, entries) in params.entries() {
            let Some(token) = key.strip_prefix(prefix.as_str()) else {
                continue;
            };
            let attribute = match token.split_once('.') {
                Some((attribute, _)) if token.ends_with(".1") => attribute,
                Some(_) => {
                    tracing::trace!(
                        target: "openid_rp",
                        token,
                        "skipping non-first indexed value"
                    );
                    continue;
                }
                None => token,
            };
            if let Some(value) = entries.first() {
                values.insert(attribute.to_string(), value.clone());
            }
        }

        tracing::debug!(
            target: "openid_rp",
            alias,
            attributes = values.len(),
            "decoded attribute exchange fetch response"
        );

        Ok(Self { values })
    }

    /// Returns the value returned for `alias`.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.values.get(alias).map(String::as_str)
    }

    /// Returns `true` if a value was returned for `alias`.
    pub fn contains(&self, alias: &str) -> bool {
        self.values.contains_key(alias)
    }

    /// Returns the number of attributes returned.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the provider returned no attribute values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(alias, value)` pairs in alias order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(alias, value)| (alias.as_str(), value.as_str()))
    }

    /// Consumes the response, returning the underlying mapping.
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.values
    }
}

impl IntoIterator for AttributeResponse {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

/// Decodes the Attribute Exchange values from a full callback URI.
///
/// The URI may be absolute or a relative reference such as `/cb?...`.
///
/// # Errors
///
/// - [`Error::MalformedUri`] if the URI cannot be parsed, contains an ASCII
///   control character, or starts or ends with a space
/// - [`Error::MalformedQuery`] if the query contains an invalid percent-escape
///   or an escape sequence that is not UTF-8
/// - any error of [`AttributeResponse::from_params`]
pub fn decode_response(callback_uri: &str) -> Result<AttributeResponse> {
    let url = parse_callback(callback_uri)?;
    let params = QueryParameterBag::parse(url.query().unwrap_or_default())?;
    AttributeResponse::from_params(&params)
}

fn parse_callback(uri: &str) -> Result<Url> {
    check_uri_characters(uri)?;
    match Url::parse(uri) {
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Ok(Url::parse(PLACEHOLDER_BASE)?.join(uri)?)
        }
        parsed => Ok(parsed?),
    }
}

/// Rejects characters that `Url::parse` would strip without reporting.
fn check_uri_characters(uri: &str) -> Result<()> {
    let bytes = uri.as_bytes();
    let offset = bytes
        .iter()
        .position(u8::is_ascii_control)
        .or_else(|| (bytes.first() == Some(&b' ')).then_some(0))
        .or_else(|| (bytes.last() == Some(&b' ')).then(|| bytes.len() - 1));

    match offset {
        Some(offset) => Err(Error::InvalidUriCharacter { offset }),
        None => Ok(()),
    }
}

/// Finds the alias under which the response declares the AX namespace.
fn extension_alias(params: &QueryParameterBag) -> Result<&str> {
    let aliases: Vec<&str> = params
        .entries()
        .filter_map(|(key, values)| {
            let alias = key.strip_prefix(ns::key::NS_PREFIX)?;
            let declares_ax = matches!(values, [only] if only == ns::AX);
            (declares_ax && !alias.is_empty()).then_some(alias)
        })
        .collect();

    match aliases.as_slice() {
        [] => Err(Error::MissingNamespace),
        [alias] => Ok(*alias),
        _ => {
            tracing::warn!(
                target: "openid_rp",
                aliases = ?aliases,
                "rejecting response declaring the attribute exchange namespace more than once"
            );
            Err(Error::AmbiguousNamespace {
                aliases: aliases.iter().map(|alias| alias.to_string()).collect(),
            })
        }
    }
}

fn check_mode(params: &QueryParameterBag, alias: &str) -> Result<()> {
    match params.get_all(&format!("openid.{alias}.mode")) {
        [mode] if mode == ns::mode::FETCH_RESPONSE => Ok(()),
        found => Err(Error::UnexpectedMode {
            alias: alias.to_string(),
            found: (!found.is_empty()).then(|| found.join(",")),
        }),
    }
}
