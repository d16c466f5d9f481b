use std::borrow::Cow;
use std::collections::btree_map::{self, BTreeMap};
use std::{fmt, str};

use percent_encoding::percent_decode_str;
use url::form_urlencoded;

use crate::error::{Error, Result};

/// A multi-valued mapping of query parameters.
///
/// Mirrors standard URL query decoding: a key repeated in the query collects
/// several values, and encoding emits one `key=value` pair per value. Keys are
/// kept in lexicographic order so that encoded output is reproducible; values
/// under one key keep their insertion order.
///
/// # Examples
///
/// ```
/// use openid_rp::QueryParameterBag;
///
/// let mut bag = QueryParameterBag::new();
/// bag.append("openid.mode", "checkid_setup");
/// bag.append("scope", "a");
/// bag.append("scope", "b");
///
/// assert_eq!(bag.get("scope"), Some("a"));
/// assert_eq!(bag.get_all("scope"), ["a", "b"]);
/// assert_eq!(bag.encode(), "openid.mode=checkid_setup&scope=a&scope=b");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameterBag {
    params: BTreeMap<String, Vec<String>>,
}

impl QueryParameterBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a raw (still percent-encoded) query string.
    ///
    /// `+` decodes to a space, empty segments are skipped and a segment
    /// without `=` yields an empty value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedQuery`] if a `%` is not followed by two
    /// hexadecimal digits, or if the escapes of a segment do not decode to
    /// valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use openid_rp::QueryParameterBag;
    ///
    /// let bag = QueryParameterBag::parse("a=1&a=2&b=hello+world").unwrap();
    /// assert_eq!(bag.get_all("a"), ["1", "2"]);
    /// assert_eq!(bag.get("b"), Some("hello world"));
    ///
    /// assert!(QueryParameterBag::parse("a=%zz").is_err());
    /// assert!(QueryParameterBag::parse("a=%FF%FE").is_err());
    /// ```
    pub fn parse(query: &str) -> Result<Self> {
        check_percent_escapes(query)?;
        check_utf8_segments(query)?;
        Ok(form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect())
    }

    /// Adds a value under `key`, keeping any values already present.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params
            .entry(key.into())
            .or_default()
            .push(value.into());
    }

    /// Sets `key` to a single value, replacing any values already present.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), vec![value.into()]);
    }

    /// Returns the first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every value stored under `key`, or an empty slice.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.params.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns `true` if at least one value is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Removes `key`, returning its values.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.params.remove(key)
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if the bag holds no keys.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterates over the distinct keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Iterates over each key together with all of its values.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.params
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Iterates over every `(key, value)` pair, one per value.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().flat_map(|(key, values)| {
            values
                .iter()
                .map(move |value| (key.as_str(), value.as_str()))
        })
    }

    /// Serializes the bag as an `application/x-www-form-urlencoded` query string.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.iter() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

impl fmt::Display for QueryParameterBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl<K, V> Extend<(K, V)> for QueryParameterBag
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.append(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParameterBag
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

impl IntoIterator for QueryParameterBag {
    type Item = (String, Vec<String>);
    type IntoIter = btree_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

/// Rejects any `%` that does not start a two-digit hexadecimal escape.
///
/// The form decoder passes such sequences through literally, so this runs first.
fn check_percent_escapes(query: &str) -> Result<()> {
    let bytes = query.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(Error::MalformedQuery { offset: i });
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

/// Rejects escapes that decode to invalid UTF-8, reporting the `%` that
/// starts the bad sequence.
///
/// The form decoder would otherwise substitute U+FFFD for the bad bytes.
fn check_utf8_segments(query: &str) -> Result<()> {
    let mut start = 0;
    for segment in query.split('&') {
        let decoded: Cow<'_, [u8]> = percent_decode_str(segment).into();
        if let Err(err) = str::from_utf8(&decoded) {
            let offset = start + raw_offset(segment, err.valid_up_to());
            return Err(Error::MalformedQuery { offset });
        }
        start += segment.len() + 1;
    }
    Ok(())
}

/// Maps a length in decoded bytes back to a byte offset in the raw segment.
fn raw_offset(segment: &str, decoded_len: usize) -> usize {
    let bytes = segment.as_bytes();
    let mut raw = 0;
    for _ in 0..decoded_len {
        raw += if bytes[raw] == b'%' { 3 } else { 1 };
    }
    raw
}
