//! Front-matter parsing for markdown documents.
//!
//! A document may start with a metadata block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Hello
//! date: 2024-01-01
//! tags: [rust, web]
//! ---
//! Body starts here.
//! ```
//!
//! Only flat `key: value` pairs are supported. Values are either scalars
//! or single-level `[a, b, c]` arrays; there is no nesting and no type
//! coercion - `42` and `true` stay strings. A missing or malformed header
//! is not an error: the whole input is treated as body.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Header block anchored at the start of the document: an opening `---`
/// line, the metadata lines, a closing `---` line, then the body. The
/// closing delimiter may also end the document with no trailing newline.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n|\z)(.*)\z").unwrap()
});

/// A front-matter value: a plain string or a single-level list of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    List(Vec<String>),
}

/// Parsed front matter plus the remaining document body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: BTreeMap<String, Value>,
}

impl FrontMatter {
    /// Scalar value for `key`, if present and not a list.
    pub fn scalar(&self, key: &str) -> Option<&str> {
        match self.fields.get(key) {
            Some(Value::Scalar(s)) => Some(s),
            _ => None,
        }
    }

    /// Value for `key` normalized to a list: a scalar becomes a
    /// single-element list, a missing key an empty one.
    pub fn list(&self, key: &str) -> Vec<String> {
        match self.fields.get(key) {
            Some(Value::List(items)) => items.clone(),
            Some(Value::Scalar(s)) => vec![s.clone()],
            None => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// Split raw document text into front matter and body.
///
/// When no well-formed header is found the front matter is empty and the
/// body is the input unchanged.
pub fn split(raw: &str) -> (FrontMatter, &str) {
    let Some(caps) = HEADER_RE.captures(raw) else {
        return (FrontMatter::default(), raw);
    };

    let header = caps.get(1).map_or("", |m| m.as_str());
    let body = caps.get(2).map_or("", |m| m.as_str());

    let mut fields = BTreeMap::new();
    for line in header.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        fields.insert(key.to_owned(), parse_value(value.trim()));
    }

    (FrontMatter { fields }, body)
}

/// Parse a raw value: `[a, b]` becomes a list, anything else a scalar.
fn parse_value(raw: &str) -> Value {
    if let Some(inner) = raw
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        let items = inner
            .split(',')
            .map(|item| unquote(item.trim()).to_owned())
            .collect();
        Value::List(items)
    } else {
        Value::Scalar(unquote(raw).to_owned())
    }
}

/// Strip one layer of matching surrounding quotes.
fn unquote(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let raw = "---\ntitle: Hello\ndate: 2024-01-01\n---\nBody text.";
        let (fm, body) = split(raw);
        assert_eq!(fm.scalar("title"), Some("Hello"));
        assert_eq!(fm.scalar("date"), Some("2024-01-01"));
        assert_eq!(body, "Body text.");
    }

    #[test]
    fn test_split_no_header() {
        let raw = "Just a plain document.\nNo metadata here.";
        let (fm, body) = split(raw);
        assert!(fm.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_split_header_not_at_start() {
        let raw = "\n---\ntitle: Hello\n---\nBody";
        let (fm, body) = split(raw);
        assert!(fm.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_split_closing_delimiter_at_eof() {
        // No newline after the closing `---`
        let raw = "---\ntitle: Hello\ndate: 2024-01-01\n---";
        let (fm, body) = split(raw);
        assert_eq!(fm.scalar("title"), Some("Hello"));
        assert_eq!(body, "");
    }

    #[test]
    fn test_split_unclosed_header() {
        let raw = "---\ntitle: Hello\nBody without closing delimiter";
        let (fm, body) = split(raw);
        assert!(fm.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_split_array_value() {
        let raw = "---\ntags: [rust, web, cli]\n---\nBody";
        let (fm, _) = split(raw);
        assert_eq!(fm.list("tags"), vec!["rust", "web", "cli"]);
    }

    #[test]
    fn test_split_array_with_quoted_elements() {
        let raw = "---\ntags: [\"rust\", 'web dev', plain]\n---\nBody";
        let (fm, _) = split(raw);
        assert_eq!(fm.list("tags"), vec!["rust", "web dev", "plain"]);
    }

    #[test]
    fn test_split_quoted_scalar() {
        let raw = "---\ntitle: \"Hello: World\"\n---\nBody";
        let (fm, _) = split(raw);
        assert_eq!(fm.scalar("title"), Some("Hello: World"));
    }

    #[test]
    fn test_split_value_with_colon() {
        // Only the first colon separates key from value
        let raw = "---\nurl: https://example.com\n---\nBody";
        let (fm, _) = split(raw);
        assert_eq!(fm.scalar("url"), Some("https://example.com"));
    }

    #[test]
    fn test_split_ignores_lines_without_colon() {
        let raw = "---\ntitle: Hello\nnot a metadata line\n---\nBody";
        let (fm, _) = split(raw);
        assert_eq!(fm.len(), 1);
        assert_eq!(fm.scalar("title"), Some("Hello"));
    }

    #[test]
    fn test_split_ignores_empty_key() {
        let raw = "---\n: orphan value\ntitle: Hello\n---\nBody";
        let (fm, _) = split(raw);
        assert_eq!(fm.len(), 1);
        assert_eq!(fm.scalar("title"), Some("Hello"));
    }

    #[test]
    fn test_split_no_type_coercion() {
        let raw = "---\ncount: 42\ndraft: true\n---\nBody";
        let (fm, _) = split(raw);
        assert_eq!(fm.scalar("count"), Some("42"));
        assert_eq!(fm.scalar("draft"), Some("true"));
    }

    #[test]
    fn test_split_crlf_line_endings() {
        let raw = "---\r\ntitle: Hello\r\n---\r\nBody";
        let (fm, body) = split(raw);
        assert_eq!(fm.scalar("title"), Some("Hello"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_multiline_body_preserved() {
        let raw = "---\ntitle: T\n---\nline one\n\nline two\n";
        let (_, body) = split(raw);
        assert_eq!(body, "line one\n\nline two\n");
    }

    #[test]
    fn test_scalar_accessor_rejects_list() {
        let raw = "---\ntags: [a, b]\n---\nBody";
        let (fm, _) = split(raw);
        assert_eq!(fm.scalar("tags"), None);
    }

    #[test]
    fn test_list_accessor_wraps_scalar() {
        let raw = "---\ntags: solo\n---\nBody";
        let (fm, _) = split(raw);
        assert_eq!(fm.list("tags"), vec!["solo"]);
    }

    #[test]
    fn test_list_accessor_missing_key() {
        let (fm, _) = split("no header");
        assert!(fm.list("tags").is_empty());
    }

    #[test]
    fn test_unquote_mismatched_quotes_kept() {
        assert_eq!(unquote("\"hello'"), "\"hello'");
        assert_eq!(unquote("'hello\""), "'hello\"");
    }

    #[test]
    fn test_unquote_single_quote_char() {
        // A lone quote is not a pair
        assert_eq!(unquote("\""), "\"");
        assert_eq!(unquote("'"), "'");
    }
}
