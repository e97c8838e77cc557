//! Text-scanning primitives.
//!
//! These operate on plain string slices and never allocate more than the value they return.
//! Nothing here knows about the structure of a kanji page; the landmarks are passed in by the
//! extractors.

use std::borrow::Cow;
use std::ops::Range;

use tracing::trace;

use crate::markers::ANCHOR_CLOSE;

/// Removes every line break (`\r\n`, `\r` and `\n`) from `s` and trims the remaining leading and
/// trailing whitespace.
///
/// # Example
///
/// ```rust
/// use jisho::scan::super_trim;
///
/// assert_eq!(super_trim("  sun,\r\n day \n"), "sun, day");
/// ```
#[must_use]
pub fn super_trim(s: &str) -> String {
    let joined: String = s.chars().filter(|&c| c != '\r' && c != '\n').collect();

    joined.trim().to_string()
}

/// Returns the byte range of `text` that lies strictly between the first occurrence of `start`
/// and the next occurrence of `end` after it.
///
/// Returns `None` if `start` does not occur, or if `end` does not occur after it.
#[must_use]
pub fn window(text: &str, start: &str, end: &str) -> Option<Range<usize>> {
    let from = text.find(start)? + start.len();
    let to = from + text[from..].find(end)?;

    Some(from..to)
}

/// Returns the trimmed text between `start` and the following `end`, with all line breaks
/// removed.
///
/// # Example
///
/// ```rust
/// use jisho::scan::between;
///
/// let html = "<strong>\n 4 \n</strong> strokes";
///
/// assert_eq!(between(html, "<strong>", "</strong>"), Some("4".to_string()));
/// assert_eq!(between(html, "<em>", "</em>"), None);
/// ```
#[must_use]
pub fn between(text: &str, start: &str, end: &str) -> Option<String> {
    window(text, start, end).map(|range| super_trim(&text[range]))
}

/// Returns the integer found between `start` and `end`.
///
/// The window is parsed liberally: only its longest leading run of decimal digits is used, so
/// `"12 strokes"` yields `12`. A window without leading digits yields `None`.
#[must_use]
pub fn int_between(text: &str, start: &str, end: &str) -> Option<u32> {
    between(text, start, end).and_then(|s| parse_leading_int(&s))
}

/// Parses the longest leading decimal prefix of `s`, after skipping leading whitespace and an
/// optional `+` sign.
///
/// A prefix too large for a `u32` saturates at [`u32::MAX`].
#[must_use]
pub fn parse_leading_int(s: &str) -> Option<u32> {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();

    if digits == 0 {
        return None;
    }

    Some(s[..digits].parse().unwrap_or(u32::MAX))
}

/// Returns the visible text of each element in a flat list of anchors, in document order.
///
/// Each element's text runs from the first `>` to the next `<`, so an element with nested markup
/// only contributes the text in front of its first nested tag. After every element the scan
/// continues behind the next `</a>`.
///
/// # Example
///
/// ```rust
/// use jisho::scan::anchor_texts;
///
/// let fragment = r#"<a href="/x">ひ</a>、 <a href="/y">か</a>"#;
///
/// assert_eq!(anchor_texts(fragment), vec!["ひ", "か"]);
/// ```
#[must_use]
pub fn anchor_texts(fragment: &str) -> Vec<String> {
    let mut rest = fragment;
    let mut texts = Vec::new();

    while rest.contains('<') {
        if let Some(text) = between(rest, ">", "<") {
            texts.push(text);
        }

        match rest.find(ANCHOR_CLOSE) {
            Some(idx) => rest = &rest[idx + ANCHOR_CLOSE.len()..],
            None => break,
        }
    }

    texts
}

/// Decodes the predefined XML entities (`&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;`) and numeric
/// character references in `s`.
///
/// Each `&...;` span is resolved on its own. Unknown entities, and ampersands that do not start
/// an entity, are kept verbatim.
///
/// # Example
///
/// ```rust
/// use jisho::scan::decode_entities;
///
/// assert_eq!(decode_entities("AT&T &amp; co&nbsp;"), "AT&T & co&nbsp;");
/// ```
#[must_use]
pub fn decode_entities(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut decoded = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(idx) = rest.find('&') {
        decoded.push_str(&rest[..idx]);

        let body = &rest[idx + 1..];
        let resolved = body
            .find(';')
            .and_then(|semi| resolve_entity(&body[..semi]).map(|value| (value, semi + 1)));

        match resolved {
            Some((value, len)) => {
                decoded.push_str(&value);
                rest = &body[len..];
            }
            None => {
                let offset = s.len() - rest.len() + idx;
                trace!(input = %s, offset, "keeping unresolved ampersand");

                decoded.push('&');
                rest = body;
            }
        }
    }

    decoded.push_str(rest);

    Cow::Owned(decoded)
}

/// Resolves the name between `&` and `;` to its replacement text.
fn resolve_entity(name: &str) -> Option<Cow<'static, str>> {
    if let Some(number) = name.strip_prefix('#') {
        let (digits, radix) = match number.strip_prefix(['x', 'X']) {
            Some(hex) => (hex, 16),
            None => (number, 10),
        };
        if !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        let code = u32::from_str_radix(digits, radix).ok()?;

        return char::from_u32(code).map(|c| Cow::Owned(c.to_string()));
    }

    quick_xml::escape::resolve_predefined_entity(name).map(Cow::Borrowed)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn window_requires_end_after_start() {
        let text = "</b> <b>bold";

        assert_eq!(window(text, "<b>", "</b>"), None);
        assert_eq!(window("<b>bold</b>", "<b>", "</b>"), Some(3..7));
    }

    #[test]
    fn window_uses_first_start_marker() {
        let text = "[a] [b]";

        assert_eq!(between(text, "[", "]"), Some("a".to_string()));
    }

    #[test]
    fn between_removes_embedded_newlines() {
        let text = "<div>\n  one\r\ntwo  \n</div>";

        assert_eq!(between(text, "<div>", "</div>"), Some("onetwo".to_string()));
    }

    #[test]
    fn between_keeps_empty_windows() {
        assert_eq!(between("<p></p>", "<p>", "</p>"), Some(String::new()));
    }

    #[rstest]
    #[case("12", Some(12))]
    #[case("  7 strokes", Some(7))]
    #[case("+3", Some(3))]
    #[case("grade", None)]
    #[case("", None)]
    #[case("-1", None)]
    #[case("99999999999", Some(u32::MAX))]
    #[case("4294967295 strokes", Some(u32::MAX))]
    fn parses_leading_integers(#[case] input: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_leading_int(input), expected);
    }

    #[test]
    fn int_between_reads_window() {
        let html = "taught in <strong>grade 2</strong>";

        assert_eq!(int_between(html, "<strong>grade ", "</strong>"), Some(2));
        assert_eq!(int_between(html, "<strong>", "</strong>"), None);
        assert_eq!(int_between(html, "<em>", "</em>"), None);
    }

    #[test]
    fn anchor_texts_stops_at_nested_tags() {
        let fragment = r#"">あ<small>(ノ)</small></a> <a href="/i">イ</a>"#;

        assert_eq!(anchor_texts(fragment), vec!["あ", "イ"]);
    }

    #[test]
    fn anchor_texts_advances_by_anchor_close() {
        // Stepping past the nested `</b>` instead of `</a>` would lose "c".
        let fragment = r#"<a href="1"><b>a</b></a><a href="2">c</a>"#;

        assert_eq!(anchor_texts(fragment), vec!["", "c"]);
    }

    #[test]
    fn anchor_texts_ignores_separators() {
        let fragment = "<a href=\"/1\">ニチ</a>、\n<a href=\"/2\">ジツ</a>\n";

        assert_eq!(anchor_texts(fragment), vec!["ニチ", "ジツ"]);
    }

    #[test]
    fn anchor_texts_on_plain_text() {
        assert!(anchor_texts("no markup here").is_empty());
        assert!(anchor_texts("").is_empty());
    }

    #[test]
    fn anchor_texts_without_closing_anchor() {
        assert_eq!(anchor_texts("<a href=\"/1\">ひ"), Vec::<String>::new());
        assert_eq!(anchor_texts("<a href=\"/1\">ひ<"), vec!["ひ"]);
    }

    #[rstest]
    #[case("&quot;test&quot;", "\"test\"")]
    #[case("salt &amp; pepper", "salt & pepper")]
    #[case("&lt;b&gt;", "<b>")]
    #[case("&#26085;", "日")]
    #[case("plain", "plain")]
    #[case("&nbsp;unknown", "&nbsp;unknown")]
    #[case("salt &amp; pepper&nbsp;mix", "salt & pepper&nbsp;mix")]
    #[case("AT&T &amp; co", "AT&T & co")]
    #[case("&#x65E5;&#X672C;", "日本")]
    #[case("a & b", "a & b")]
    #[case("&amp", "&amp")]
    #[case("&#xD800;&lt;", "&#xD800;<")]
    #[case("&;&#;", "&;&#;")]
    #[case("&#+65;&#65;", "&#+65;A")]
    fn decodes_entities(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(decode_entities(input), expected);
    }
}
