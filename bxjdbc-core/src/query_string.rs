//! Query string encoding with configurable delimiters.
//!
//! JDBC drivers accept their options as `key=value` pairs after the `?` of a
//! connection URL. The delimiter is `&` for most drivers but is configurable,
//! so this module does not go through `url::form_urlencoded`.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::properties::Properties;
use crate::value::PropertyValue;

/// Default pair delimiter.
pub const DEFAULT_DELIMITER: &str = "&";

/// Everything except the RFC 3986 unreserved characters is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a single key or value.
pub fn encode(s: &str) -> Cow<'_, str> {
    utf8_percent_encode(s, COMPONENT).into()
}

/// Decode a single key or value. `+` decodes to a space.
pub fn decode(s: &str) -> String {
    let spaced = s.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Parse a delimited query string into string-valued properties.
///
/// A leading `?` is ignored, empty segments are skipped and a segment with no
/// `=` becomes a key with an empty value. Later duplicates win.
///
/// ```rust
/// use bxjdbc_core::query_string;
///
/// let params = query_string::parse("useSSL=false;serverTimezone=UTC", ";");
/// assert_eq!(params.len(), 2);
/// assert_eq!(params.get("serverTimezone").and_then(|v| v.as_str()), Some("UTC"));
/// ```
pub fn parse(input: &str, delimiter: &str) -> Properties {
    let delimiter = if delimiter.is_empty() {
        DEFAULT_DELIMITER
    } else {
        delimiter
    };
    let input = input.trim();
    let input = input.strip_prefix('?').unwrap_or(input);

    input
        .split(delimiter)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((key, value)) => (decode(key), decode(value)),
            None => (decode(segment), String::new()),
        })
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key, PropertyValue::String(value)))
        .collect()
}

/// Serialize properties as `key=value` pairs joined by `delimiter`.
///
/// Keys and values are percent-encoded; order follows the bag.
pub fn serialize(params: &Properties, delimiter: &str) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                encode(key.as_str()),
                encode(&value.to_string())
            )
        })
        .collect::<Vec<_>>()
        .join(delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_default_delimiter() {
        let params = parse("a=1&b=two", DEFAULT_DELIMITER);
        assert_eq!(params.get("a"), Some(&PropertyValue::from("1")));
        assert_eq!(params.get("b"), Some(&PropertyValue::from("two")));
    }

    #[test]
    fn test_parse_edge_cases() {
        let params = parse("?flag&&x=1&x=2& =skip", "&");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("flag"), Some(&PropertyValue::from("")));
        assert_eq!(params.get("x"), Some(&PropertyValue::from("2")));
    }

    #[test]
    fn test_parse_decodes() {
        let params = parse("zone=Europe%2FParis&name=a+b", "&");
        assert_eq!(params.get("zone"), Some(&PropertyValue::from("Europe/Paris")));
        assert_eq!(params.get("name"), Some(&PropertyValue::from("a b")));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("", "&").is_empty());
        assert!(parse("   ", "&").is_empty());
    }

    #[test]
    fn test_serialize_encodes() {
        let params = Properties::of([
            ("password", PropertyValue::from("p@ss word")),
            ("cachePrepStmts", PropertyValue::Bool(true)),
            ("prepStmtCacheSize", PropertyValue::Int(250)),
        ]);
        assert_eq!(
            serialize(&params, "&"),
            "password=p%40ss%20word&cachePrepStmts=true&prepStmtCacheSize=250"
        );
    }

    #[test]
    fn test_serialize_custom_delimiter() {
        let params = Properties::of([("a", 1), ("b", 2)]);
        assert_eq!(serialize(&params, ";"), "a=1;b=2");
        assert_eq!(serialize(&Properties::new(), "&"), "");
    }
}
