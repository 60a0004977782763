//! Query-string encoding for multi-valued parameter mappings.

use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left unencoded in query components: RFC 3986 unreserved.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode and flatten a multi-valued parameter mapping into a
/// single query string (no `?` prefix).
///
/// A key with N values yields N `key=value` pairs in the value list's
/// order; keys follow the mapping's iteration order. A key with an empty
/// value list is emitted bare. Returns `None` for an empty mapping.
#[must_use]
pub fn encode_query_params(params: &BTreeMap<String, Vec<String>>) -> Option<String> {
    if params.is_empty() {
        return None;
    }

    let mut pairs = Vec::new();
    for (key, values) in params {
        let encoded_key = utf8_percent_encode(key, QUERY_ENCODE_SET).to_string();
        if values.is_empty() {
            pairs.push(encoded_key);
            continue;
        }
        for value in values {
            let encoded_value = utf8_percent_encode(value, QUERY_ENCODE_SET);
            pairs.push(format!("{encoded_key}={encoded_value}"));
        }
    }
    Some(pairs.join("&"))
}

#[cfg(test)]
mod tests {
    use percent_encoding::percent_decode_str;

    use super::*;

    fn params(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(k, vs)| {
                (
                    (*k).to_owned(),
                    vs.iter().map(|v| (*v).to_owned()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_should_return_none_for_empty_input() {
        assert_eq!(encode_query_params(&BTreeMap::new()), None);
    }

    #[test]
    fn test_should_flatten_multi_valued_keys_in_order() {
        let encoded = encode_query_params(&params(&[("tag", &["a", "b"]), ("zone", &["1"])]))
            .expect("non-empty input");
        assert_eq!(encoded, "tag=a&tag=b&zone=1");
    }

    #[test]
    fn test_should_percent_encode_reserved_characters() {
        let encoded = encode_query_params(&params(&[("path", &["a/b c&d"])]))
            .expect("non-empty input");
        assert_eq!(encoded, "path=a%2Fb%20c%26d");
    }

    #[test]
    fn test_should_emit_bare_key_for_empty_value_list() {
        let encoded =
            encode_query_params(&params(&[("marker", &[])])).expect("non-empty input");
        assert_eq!(encoded, "marker");
    }

    #[test]
    fn test_should_round_trip_through_decoding() {
        let original = params(&[("a key", &["v 1", "v&2"]), ("plain", &["x"])]);
        let encoded = encode_query_params(&original).expect("non-empty input");

        let mut decoded: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for pair in encoded.split('&') {
            let (key, value) = pair.split_once('=').expect("key=value pair");
            let key = percent_decode_str(key)
                .decode_utf8()
                .expect("utf8 key")
                .into_owned();
            let value = percent_decode_str(value)
                .decode_utf8()
                .expect("utf8 value")
                .into_owned();
            decoded.entry(key).or_default().push(value);
        }

        assert_eq!(decoded, original);
    }
}
