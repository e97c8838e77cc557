//! Assembly of a [`KanjiRecord`] from a complete kanji page.

use tracing::{debug, warn};

use crate::extract::{compound_examples, parts, radical, readings};
use crate::markers::{
    GRADE_END, GRADE_START, LEVEL_END, LEVEL_START, MEANING_END, MEANING_START, STROKE_COUNT_END,
    STROKE_COUNT_START, kanji_glyph_heading,
};
use crate::scan::{between, int_between};
use crate::{CompoundExample, KanjiDetails, KanjiRecord, ReadingClass};

/// Returns whether `html` is the page of exactly `kanji`.
#[must_use]
pub fn contains_kanji_glyph(html: &str, kanji: &str) -> bool {
    html.contains(&kanji_glyph_heading(kanji))
}

/// Parses the kanji page `html` into a record for `kanji`.
///
/// If the page does not carry the heading for `kanji`, the returned record is marked as not
/// found and nothing else is extracted. Otherwise every field is extracted independently; a
/// section missing from the page leaves the corresponding field empty.
///
/// This never fails. Compound lists that are present but malformed are logged and left empty.
#[must_use]
pub fn parse_kanji_page(html: &str, kanji: &str) -> KanjiRecord {
    if !contains_kanji_glyph(html, kanji) {
        debug!(%kanji, "page does not contain kanji heading");

        return KanjiRecord::not_found(kanji);
    }

    let details = KanjiDetails {
        grade_number: int_between(html, GRADE_START, GRADE_END),
        level: between(html, LEVEL_START, LEVEL_END).filter(|s| !s.is_empty()),
        stroke_count: int_between(html, STROKE_COUNT_START, STROKE_COUNT_END),
        meaning: between(html, MEANING_START, MEANING_END).filter(|s| !s.is_empty()),
        kunyomi: readings(html, ReadingClass::Kunyomi),
        onyomi: readings(html, ReadingClass::Onyomi),
        onyomi_examples: examples_or_empty(html, ReadingClass::Onyomi),
        kunyomi_examples: examples_or_empty(html, ReadingClass::Kunyomi),
        radical: radical(html),
        parts: parts(html),
    };

    debug!(
        %kanji,
        num_kunyomi = details.kunyomi.len(),
        num_onyomi = details.onyomi.len(),
        num_parts = details.parts.len(),
        "parsed kanji page"
    );

    KanjiRecord::found(kanji, details)
}

fn examples_or_empty(html: &str, class: ReadingClass) -> Vec<CompoundExample> {
    compound_examples(html, class).unwrap_or_else(|err| {
        warn!(?class, %err, "compound list does not match the expected layout");

        vec![]
    })
}
