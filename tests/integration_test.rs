//! End-to-end flows: attribute request → redirect → provider callback → attributes.

use openid_rp::ax::{self, schema, AttributeRequest};
use openid_rp::{
    build_redirect_url, redirect_url, DiscoveredEndpoint, ErrorKind, QueryParameterBag,
    RedirectTarget,
};
use url::Url;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Builds the callback a provider would send back for the given AX request,
/// answering each declared type with a value.
fn provider_callback(redirect: &str, ext_alias: &str, answer: impl Fn(&str) -> String) -> String {
    let url = Url::parse(redirect).expect("redirect parses");
    let request = QueryParameterBag::parse(url.query().unwrap_or_default()).expect("query parses");

    let mut response = QueryParameterBag::new();
    response.set("openid.ns", "http://specs.openid.net/auth/2.0");
    response.set("openid.mode", "id_res");
    response.set(format!("openid.ns.{ext_alias}"), "http://openid.net/srv/ax/1.0");
    response.set(format!("openid.{ext_alias}.mode"), "fetch_response");

    for (key, type_uri) in request.iter() {
        if let Some(alias) = key.strip_prefix("openid.ax.type.") {
            response.set(format!("openid.{ext_alias}.type.{alias}"), type_uri);
            response.set(format!("openid.{ext_alias}.value.{alias}"), answer(alias));
        }
    }

    let return_to = request.get("openid.return_to").expect("return_to present");
    format!("{return_to}?{}", response.encode())
}

#[test]
fn attribute_exchange_round_trip() {
    init_tracing();

    let fetch = AttributeRequest::new()
        .required("email", schema::CONTACT_EMAIL)
        .if_available("first", schema::NAME_PERSON_FIRST)
        .if_available("last", schema::NAME_PERSON_LAST)
        .encode();

    let redirect = RedirectTarget::new("https://op.example.com/server", "https://rp.example.com/cb")
        .realm("https://rp.example.com/")
        .extra_parameters(fetch)
        .to_url();

    let callback = provider_callback(&redirect, "ext0", |alias| format!("value-of-{alias}"));
    let attributes = ax::decode_response(&callback).expect("valid fetch response");

    assert_eq!(attributes.len(), 3);
    assert_eq!(attributes.get("email"), Some("value-of-email"));
    assert_eq!(attributes.get("first"), Some("value-of-first"));
    assert_eq!(attributes.get("last"), Some("value-of-last"));
}

#[test]
fn redirect_carries_core_and_extension_parameters() {
    init_tracing();

    let fetch = ax::encode_request([("one", "test:one")], [("two", "2"), ("three", "3")]);
    let redirect = build_redirect_url(
        "https://op.example.com/server?tenant=acme",
        "",
        "",
        "https://rp.example.com/cb",
        "",
        Some(&fetch),
    );

    assert_eq!(redirect.matches('?').count(), 1);

    let url = Url::parse(&redirect).unwrap();
    let params = QueryParameterBag::parse(url.query().unwrap()).unwrap();

    assert_eq!(params.get("tenant"), Some("acme"));
    assert_eq!(params.get("openid.mode"), Some("checkid_setup"));
    assert_eq!(
        params.get("openid.identity"),
        Some("http://specs.openid.net/auth/2.0/identifier_select")
    );
    assert!(!params.contains_key("openid.claimed_id"));
    assert_eq!(params.get("openid.ns.ax"), Some("http://openid.net/srv/ax/1.0"));
    assert_eq!(params.get("openid.ax.mode"), Some("fetch_request"));
    assert_eq!(params.get("openid.ax.type.one"), Some("test:one"));
    assert_eq!(params.get("openid.ax.required"), Some("one"));
    assert_eq!(params.get("openid.ax.if_available"), Some("three,two"));
}

#[test]
fn discovery_driven_redirect() {
    init_tracing();

    let discover = |identifier: &str| -> Result<DiscoveredEndpoint, std::io::Error> {
        assert_eq!(identifier, "https://alice.example.org/");
        Ok(DiscoveredEndpoint {
            op_endpoint: "https://op.example.com/server".to_string(),
            op_local_id: "https://op.example.com/u/alice".to_string(),
            claimed_id: "https://alice.example.org/".to_string(),
        })
    };

    let url = redirect_url(
        "https://alice.example.org/",
        "https://rp.example.com/cb",
        "https://rp.example.com/",
        &discover,
        None,
    )
    .expect("discovery succeeds");

    let params = QueryParameterBag::parse(Url::parse(&url).unwrap().query().unwrap()).unwrap();
    assert_eq!(params.get("openid.claimed_id"), Some("https://alice.example.org/"));
    assert_eq!(params.get("openid.identity"), Some("https://op.example.com/u/alice"));
    assert_eq!(params.get("openid.realm"), Some("https://rp.example.com/"));
}

#[test]
fn discovery_failure_surfaces_as_error() {
    let discover = |_: &str| -> Result<DiscoveredEndpoint, std::io::Error> {
        Err(std::io::Error::new(std::io::ErrorKind::TimedOut, "fetch timed out"))
    };

    let err = redirect_url("bob.example", "https://rp.example.com/cb", "", &discover, None)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Discovery);
}

#[test]
fn callback_errors_are_distinguished() {
    init_tracing();

    let missing = "https://rp.example.com/cb?openid.mode=id_res&openid.ax.mode=fetch_response";
    assert_eq!(
        ax::decode_response(missing).unwrap_err().kind(),
        ErrorKind::MissingNamespace
    );

    let wrong_mode = "https://rp.example.com/cb\
                      ?openid.ns.ax=http%3A%2F%2Fopenid.net%2Fsrv%2Fax%2F1.0\
                      &openid.ax.mode=store_response_success";
    assert_eq!(
        ax::decode_response(wrong_mode).unwrap_err().kind(),
        ErrorKind::UnexpectedMode
    );

    let bad_escape = "https://rp.example.com/cb?openid.ns.ax=%G0";
    assert_eq!(
        ax::decode_response(bad_escape).unwrap_err().kind(),
        ErrorKind::MalformedQuery
    );

    assert_eq!(
        ax::decode_response("https://exa mple.com/cb?x=1").unwrap_err().kind(),
        ErrorKind::MalformedUri
    );
}
