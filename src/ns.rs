//! Namespace URIs, protocol modes and wire parameter names.
//!
//! These strings form the externally observable contract with identity
//! providers and must match bit-for-bit.

/// OpenID 2.0 authentication namespace.
pub const OPENID2: &str = "http://specs.openid.net/auth/2.0";

/// Attribute Exchange 1.0 extension namespace.
pub const AX: &str = "http://openid.net/srv/ax/1.0";

/// Identifier asking the provider to let the user choose an identity.
pub const IDENTIFIER_SELECT: &str = "http://specs.openid.net/auth/2.0/identifier_select";

/// Protocol mode values.
pub mod mode {
    /// Interactive authentication request.
    pub const CHECKID_SETUP: &str = "checkid_setup";
    /// Attribute Exchange fetch request.
    pub const FETCH_REQUEST: &str = "fetch_request";
    /// Attribute Exchange fetch response.
    pub const FETCH_RESPONSE: &str = "fetch_response";
}

/// Core OpenID 2.0 parameter names.
#[allow(missing_docs)]
pub mod key {
    pub const NS: &str = "openid.ns";
    pub const MODE: &str = "openid.mode";
    pub const RETURN_TO: &str = "openid.return_to";
    pub const CLAIMED_ID: &str = "openid.claimed_id";
    pub const IDENTITY: &str = "openid.identity";
    pub const REALM: &str = "openid.realm";

    /// Prefix of every extension namespace declaration, `openid.ns.<alias>`.
    pub const NS_PREFIX: &str = "openid.ns.";
}

/// Attribute Exchange request parameter names, under the fixed `ax` alias.
pub(crate) mod ax_key {
    pub const NS: &str = "openid.ns.ax";
    pub const MODE: &str = "openid.ax.mode";
    pub const TYPE_PREFIX: &str = "openid.ax.type.";
    pub const REQUIRED: &str = "openid.ax.required";
    pub const IF_AVAILABLE: &str = "openid.ax.if_available";
}
