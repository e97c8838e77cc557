//! URL construction for the dictionary's pages and static assets.

use url::Url;

use crate::Error;

/// Base URL of the page search.
pub const SEARCH_BASE_URL: &str = "https://jisho.org/search/";
/// Base URL of the word search API.
pub const PHRASE_API_URL: &str = "https://jisho.org/api/v1/search/words";
/// Base URL of the static stroke order diagrams.
pub const STROKE_ORDER_DIAGRAM_BASE_URL: &str =
    "http://classic.jisho.org/static/images/stroke_diagrams/";

/// Returns the URL of the stroke order diagram for `kanji`.
///
/// The diagram is keyed by the decimal value of the first code point. An empty `kanji` maps to
/// code point 0.
///
/// # Example
///
/// ```rust
/// use jisho::stroke_order_diagram_uri;
///
/// assert_eq!(
///     stroke_order_diagram_uri("語"),
///     "http://classic.jisho.org/static/images/stroke_diagrams/35486_frames.png"
/// );
/// ```
#[must_use]
pub fn stroke_order_diagram_uri(kanji: &str) -> String {
    let code_point = kanji.chars().next().map_or(0, u32::from);

    format!("{STROKE_ORDER_DIAGRAM_BASE_URL}{code_point}_frames.png")
}

/// Returns the URL of the kanji details page for `kanji` below `base`.
///
/// # Errors
///
/// Returns [`Error::InvalidBaseUrl`] if `base` cannot carry path segments.
pub fn uri_for_kanji_search(base: &Url, kanji: &str) -> Result<Url, Error> {
    search_uri(base, kanji, "kanji")
}

/// Returns the URL of the example sentence search for `phrase` below `base`.
///
/// # Errors
///
/// Returns [`Error::InvalidBaseUrl`] if `base` cannot carry path segments.
pub fn uri_for_example_search(base: &Url, phrase: &str) -> Result<Url, Error> {
    search_uri(base, phrase, "sentences")
}

/// Appends `{term}#{tag}` as a single, percent-encoded path segment, so the `#` ends up as
/// `%23` rather than starting a fragment.
fn search_uri(base: &Url, term: &str, tag: &str) -> Result<Url, Error> {
    let mut url = base.clone();

    url.path_segments_mut()
        .map_err(|()| Error::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .push(&format!("{term}#{tag}"));

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse(SEARCH_BASE_URL).unwrap()
    }

    #[test]
    fn stroke_order_diagram_uses_first_code_point() {
        assert_eq!(
            stroke_order_diagram_uri("日本"),
            "http://classic.jisho.org/static/images/stroke_diagrams/26085_frames.png"
        );
        assert_eq!(
            stroke_order_diagram_uri(""),
            "http://classic.jisho.org/static/images/stroke_diagrams/0_frames.png"
        );
    }

    #[test]
    fn kanji_search_encodes_term_and_tag() {
        let url = uri_for_kanji_search(&base(), "日").unwrap();

        assert_eq!(url.as_str(), "https://jisho.org/search/%E6%97%A5%23kanji");
    }

    #[test]
    fn example_search_encodes_spaces() {
        let url = uri_for_example_search(&base(), "日 本").unwrap();

        assert_eq!(
            url.as_str(),
            "https://jisho.org/search/%E6%97%A5%20%E6%9C%AC%23sentences"
        );
    }

    #[test]
    fn rejects_cannot_be_a_base_urls() {
        let base = Url::parse("mailto:someone@example.com").unwrap();

        assert!(matches!(
            uri_for_kanji_search(&base, "日"),
            Err(Error::InvalidBaseUrl(_))
        ));
    }
}
