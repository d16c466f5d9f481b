//! Shared proptest strategies for unit tests.

use std::collections::BTreeMap;

use proptest::prelude::*;

/// Generates an alias: a short token without `.` separators.
pub(crate) fn arb_alias() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

/// Generates an attribute type URI.
pub(crate) fn arb_type_uri() -> impl Strategy<Value = String> {
    "https?://[a-z]{1,10}\\.example/schema/[a-zA-Z/]{1,16}"
}

/// Generates a set of `alias -> value` entries with unique aliases.
///
/// Values are type URIs, which also serve as realistic attribute values.
pub(crate) fn arb_attribute_set() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(arb_alias(), arb_type_uri(), 0..6)
}
