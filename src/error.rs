use std::fmt;

use thiserror::Error;

/// Errors produced while building or decoding OpenID messages.
///
/// Every error is a parse or validation failure: none of them is retryable,
/// and decoding never returns a partial result alongside an error.
#[derive(Debug, Error)]
pub enum Error {
    /// The callback URI could not be parsed.
    #[error("malformed URI: {0}")]
    MalformedUri(#[from] url::ParseError),

    /// The callback URI contains a control character or surrounding whitespace.
    #[error("malformed URI: invalid character at byte {offset}")]
    InvalidUriCharacter {
        /// Byte offset of the offending character
        offset: usize,
    },

    /// The query component contains an invalid percent-escape, or an escape
    /// sequence that does not decode to UTF-8.
    #[error("malformed query string: invalid percent-encoding at byte {offset}")]
    MalformedQuery {
        /// Byte offset of the offending `%`
        offset: usize,
    },

    /// No `openid.ns.<alias>` parameter declares the Attribute Exchange namespace.
    #[error("no alias declared for the attribute exchange namespace")]
    MissingNamespace,

    /// More than one alias declares the Attribute Exchange namespace.
    #[error("attribute exchange namespace declared under several aliases: {}", .aliases.join(", "))]
    AmbiguousNamespace {
        /// Every alias bound to the namespace, in key order
        aliases: Vec<String>,
    },

    /// The extension mode is absent, repeated, or not `fetch_response`.
    #[error("unexpected mode for openid.{alias}.mode: {}", .found.as_deref().unwrap_or("<absent>"))]
    UnexpectedMode {
        /// The extension alias whose mode was checked
        alias: String,
        /// The comma-joined mode values found, if any
        found: Option<String>,
    },

    /// The discovery capability failed to resolve an identifier.
    #[error("discovery failed for identifier '{identifier}': {source}")]
    Discovery {
        /// The identifier that was being resolved
        identifier: String,
        /// The error reported by the discoverer
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl Error {
    /// Returns the payload-free kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedUri(_) | Error::InvalidUriCharacter { .. } => ErrorKind::MalformedUri,
            Error::MalformedQuery { .. } => ErrorKind::MalformedQuery,
            Error::MissingNamespace => ErrorKind::MissingNamespace,
            Error::AmbiguousNamespace { .. } => ErrorKind::AmbiguousNamespace,
            Error::UnexpectedMode { .. } => ErrorKind::UnexpectedMode,
            Error::Discovery { .. } => ErrorKind::Discovery,
        }
    }
}

/// The kind of an [`Error`], without its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::MalformedUri`]
    MalformedUri,
    /// See [`Error::MalformedQuery`]
    MalformedQuery,
    /// See [`Error::MissingNamespace`]
    MissingNamespace,
    /// See [`Error::AmbiguousNamespace`]
    AmbiguousNamespace,
    /// See [`Error::UnexpectedMode`]
    UnexpectedMode,
    /// See [`Error::Discovery`]
    Discovery,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MalformedUri => write!(f, "malformed URI"),
            ErrorKind::MalformedQuery => write!(f, "malformed query"),
            ErrorKind::MissingNamespace => write!(f, "missing namespace"),
            ErrorKind::AmbiguousNamespace => write!(f, "ambiguous namespace"),
            ErrorKind::UnexpectedMode => write!(f, "unexpected mode"),
            ErrorKind::Discovery => write!(f, "discovery failed"),
        }
    }
}

/// Result type for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Error::MissingNamespace.kind(), ErrorKind::MissingNamespace);
        assert_eq!(
            Error::MalformedQuery { offset: 3 }.kind(),
            ErrorKind::MalformedQuery
        );
        assert_eq!(
            Error::UnexpectedMode {
                alias: "ax".to_string(),
                found: None,
            }
            .kind(),
            ErrorKind::UnexpectedMode
        );
    }

    #[test]
    fn display_includes_details() {
        let err = Error::UnexpectedMode {
            alias: "ext0".to_string(),
            found: Some("fetch_request".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "unexpected mode for openid.ext0.mode: fetch_request"
        );

        let err = Error::UnexpectedMode {
            alias: "ext0".to_string(),
            found: None,
        };
        assert!(err.to_string().ends_with("<absent>"));

        let err = Error::AmbiguousNamespace {
            aliases: vec!["a".to_string(), "b".to_string()],
        };
        assert!(err.to_string().contains("a, b"));
    }

    #[test]
    fn url_errors_convert() {
        let err: Error = url::ParseError::EmptyHost.into();
        assert_eq!(err.kind(), ErrorKind::MalformedUri);
    }

    #[test]
    fn invalid_uri_character_is_malformed_uri() {
        let err = Error::InvalidUriCharacter { offset: 4 };
        assert_eq!(err.kind(), ErrorKind::MalformedUri);
        assert!(err.to_string().contains("byte 4"));
    }

    #[test]
    fn discovery_error_exposes_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no endpoint");
        let err = Error::Discovery {
            identifier: "https://example.com/user".to_string(),
            source: Box::new(io),
        };
        assert_eq!(err.kind(), ErrorKind::Discovery);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("https://example.com/user"));
    }
}
