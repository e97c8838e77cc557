use tracing::debug;

use crate::Radical;
use crate::markers::{
    BLOCK_END, PARTS_START, PARTS_WRAPPER_CLOSE, PARTS_WRAPPER_OPEN, RADICAL_MEANING_END,
    RADICAL_MEANING_START, RADICAL_SYMBOL_END,
};
use crate::scan::{anchor_texts, super_trim, window};

/// Returns the radical of the kanji.
///
/// The page lists the radical as its meaning followed by the glyph:
///
/// ```html
/// <span class="radical_meaning">sun, day</span> 日</span>
/// ```
///
/// Returns `None` if the meaning is missing or empty, or if no glyph follows it.
#[must_use]
pub fn radical(html: &str) -> Option<Radical> {
    let meaning_range = window(html, RADICAL_MEANING_START, RADICAL_MEANING_END)?;
    let meaning = super_trim(&html[meaning_range.clone()]);

    if meaning.is_empty() {
        return None;
    }

    let rest = &html[meaning_range.end + RADICAL_MEANING_END.len()..];
    let symbol = super_trim(&rest[..rest.find(RADICAL_SYMBOL_END)?]);

    if symbol.is_empty() {
        return None;
    }

    Some(Radical { symbol, meaning })
}

/// Returns the component parts of the kanji in page order.
///
/// A page without a parts block yields an empty list.
#[must_use]
pub fn parts(html: &str) -> Vec<String> {
    let Some(range) = window(html, PARTS_START, BLOCK_END) else {
        debug!("page has no parts block");

        return vec![];
    };

    let block = super_trim(&html[range])
        .replacen(PARTS_WRAPPER_OPEN, "", 1)
        .replacen(PARTS_WRAPPER_CLOSE, "", 1);

    anchor_texts(&block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_radical() {
        let html = r#"<span>
          <span class="radical_meaning">
            sun, day
          </span>
          日
        </span>"#;

        assert_eq!(
            radical(html),
            Some(Radical {
                symbol: "日".to_string(),
                meaning: "sun, day".to_string(),
            })
        );
    }

    #[test]
    fn meaning_without_symbol_is_not_present() {
        let html = r#"<span class="radical_meaning">sun, day</span>"#;

        assert_eq!(radical(html), None);
    }

    #[test]
    fn meaning_with_empty_symbol_is_not_present() {
        let html = r#"<span class="radical_meaning">sun, day</span>   </span>"#;

        assert_eq!(radical(html), None);
    }

    #[test]
    fn empty_meaning_is_not_present() {
        let html = r#"<span class="radical_meaning">  </span> 日</span>"#;

        assert_eq!(radical(html), None);
    }

    #[test]
    fn missing_radical() {
        assert_eq!(radical("<span>日</span>"), None);
    }

    #[test]
    fn extracts_parts() {
        let html = r#"<dl class="dictionary_entry on_yomi">
          <dt>Parts:</dt>
          <dd>
            <a href="//jisho.org/search/%E5%8F%A3%20%23kanji">口</a>
            <a href="//jisho.org/search/%E4%BA%94%20%23kanji">五</a>
            <a href="//jisho.org/search/%E8%A8%80%20%23kanji">言</a>
          </dd>
        </dl>"#;

        assert_eq!(parts(html), vec!["口", "五", "言"]);
    }

    #[test]
    fn missing_parts_block_is_empty() {
        assert!(parts("<dt>Parts:</dt><dd><a>口</a></dd>").is_empty());
        assert!(parts("<dl></dl>").is_empty());
    }
}
