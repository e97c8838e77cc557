//! Structured types
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the two phonetic reading systems of a kanji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ReadingClass {
    /// Sino-Japanese reading (音読み).
    Onyomi,
    /// Native Japanese reading (訓読み).
    Kunyomi,
}

impl ReadingClass {
    /// Returns the symbol that the page uses to label this reading class.
    #[must_use]
    pub const fn locator(self) -> &'static str {
        match self {
            ReadingClass::Onyomi => "On",
            ReadingClass::Kunyomi => "Kun",
        }
    }
}

/// Result of looking up a single kanji.
///
/// `details` is only present when the page contained the kanji, and `found` always mirrors that.
/// Use [`KanjiRecord::not_found`] and [`KanjiRecord::found`] to construct one.
///
/// # HTML Source
/// Parsed from a complete jisho.org kanji page
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct KanjiRecord {
    /// The kanji that was looked up.
    pub query: String,
    /// Whether the page describes `query`.
    pub found: bool,
    /// Extracted dictionary data, if found.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub details: Option<KanjiDetails>,
    /// URL of the stroke order diagram. Derived from `query` alone.
    pub stroke_order_diagram_uri: String,
}

/// Dictionary data for a kanji that was found on its page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct KanjiDetails {
    /// School grade the kanji is taught in.
    ///
    /// Parsed from `taught in <strong>grade N</strong>`
    pub grade_number: Option<u32>,
    /// Label of the level the kanji is taught at, e.g. "grade 1" or "junior high".
    pub level: Option<String>,
    /// Number of strokes.
    ///
    /// Parsed from `<strong>N</strong> strokes`
    pub stroke_count: Option<u32>,
    /// English meanings, comma separated as shown on the page.
    pub meaning: Option<String>,
    /// Kun readings in page order.
    pub kunyomi: Vec<String>,
    /// On readings in page order.
    pub onyomi: Vec<String>,
    /// Compounds that use the on reading.
    pub onyomi_examples: Vec<CompoundExample>,
    /// Compounds that use the kun reading.
    pub kunyomi_examples: Vec<CompoundExample>,
    /// Semantic radical, if the page lists one.
    pub radical: Option<Radical>,
    /// Component parts in page order.
    pub parts: Vec<String>,
}

/// A word that uses the kanji, with its reading and English gloss.
///
/// # HTML Source
/// Parsed from `<li>` blocks below the `<h2>On reading compounds</h2>` and
/// `<h2>Kun reading compounds</h2>` headings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompoundExample {
    /// The compound as written, e.g. "日本"
    pub example: String,
    /// Reading of the compound without the 【】 brackets, e.g. "ニホン"
    pub reading: String,
    /// English gloss with entities decoded
    pub meaning: String,
}

/// The radical a kanji is classified under.
///
/// # HTML Source
/// Parsed from `<span class="radical_meaning">` and the text that follows it
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Radical {
    /// The radical glyph
    pub symbol: String,
    /// The radical's meaning, e.g. "sun, day"
    pub meaning: String,
}

impl KanjiRecord {
    /// Returns a record for a kanji the page does not describe.
    #[must_use]
    pub fn not_found(query: &str) -> KanjiRecord {
        KanjiRecord {
            query: query.to_string(),
            found: false,
            details: None,
            stroke_order_diagram_uri: crate::uri::stroke_order_diagram_uri(query),
        }
    }

    /// Returns a record for a kanji with the given extracted `details`.
    #[must_use]
    pub fn found(query: &str, details: KanjiDetails) -> KanjiRecord {
        KanjiRecord {
            query: query.to_string(),
            found: true,
            details: Some(details),
            stroke_order_diagram_uri: crate::uri::stroke_order_diagram_uri(query),
        }
    }

    /// Parses a kanji page and returns the record for `kanji`.
    ///
    /// This is equivalent to calling [`parse_kanji_page`](crate::parse_kanji_page).
    #[must_use]
    pub fn from_html(html: impl AsRef<str>, kanji: &str) -> KanjiRecord {
        crate::document::parse_kanji_page(html.as_ref(), kanji)
    }
}
