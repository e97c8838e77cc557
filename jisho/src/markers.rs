//! Landmark table.
//!
//! Every literal substring the extractors search for lives here. The kanji page is not
//! machine-readable in any principled way, so these tokens have to match the markup
//! byte-for-byte, attribute order and quoting included.

/// Token that closes an inline anchor element. Used to step from one list element to the next.
pub const ANCHOR_CLOSE: &str = "</a>";

/// Generic end of a definition-list block.
pub const BLOCK_END: &str = "</dl>";

/// Opening of the nested readings list inside a reading block.
pub const READINGS_LIST_START: &str = "<dd class=\"kanji-details__main-readings-list\" lang=\"ja\">";
/// Closing of the nested readings list.
pub const READINGS_LIST_END: &str = "</dd>";

/// List opening that directly follows a compounds heading.
pub const COMPOUNDS_LIST_START: &str = "<ul class=\"no-bullet\">";
/// End of a compounds list.
pub const COMPOUNDS_LIST_END: &str = "</ul>";
/// A line consisting only of this token opens one compound record.
pub const LIST_ITEM_OPEN: &str = "<li>";
/// A line consisting only of this token closes one compound record.
pub const LIST_ITEM_CLOSE: &str = "</li>";

/// Opening of the radical's English meaning. The symbol follows the meaning's closing tag.
pub const RADICAL_MEANING_START: &str = "<span class=\"radical_meaning\">";
/// Closing of the radical meaning.
pub const RADICAL_MEANING_END: &str = "</span>";
/// Closing of the span that holds the radical symbol.
pub const RADICAL_SYMBOL_END: &str = "</span>";

/// Label that opens the parts block.
pub const PARTS_START: &str = "<dt>Parts:</dt>";
/// Wrapper around the parts anchors. Stripped before parsing the anchors.
pub const PARTS_WRAPPER_OPEN: &str = "<dd>";
/// Closing of the parts wrapper.
pub const PARTS_WRAPPER_CLOSE: &str = "</dd>";

/// Precedes the school grade number.
pub const GRADE_START: &str = "taught in <strong>grade ";
/// Follows the school grade number.
pub const GRADE_END: &str = "</strong>";
/// Precedes the full level label, e.g. `grade 1` or `junior high`.
pub const LEVEL_START: &str = "taught in <strong>";
/// Follows the level label.
pub const LEVEL_END: &str = "</strong>";
/// Opens the stroke count. The first bold element on the page must be the stroke count.
pub const STROKE_COUNT_START: &str = "<strong>";
/// Closes the stroke count, unit included.
pub const STROKE_COUNT_END: &str = "</strong> strokes";
/// Opening of the English meaning block.
pub const MEANING_START: &str = "<div class=\"kanji-details__main-meanings\">";
/// Closing of the meaning block.
pub const MEANING_END: &str = "</div>";

/// Returns the heading that proves the page describes `kanji`.
///
/// The character has to match exactly, the surrounding tag and attribute values too.
#[must_use]
pub fn kanji_glyph_heading(kanji: &str) -> String {
    format!("<h1 class=\"character\" data-area-name=\"print\" lang=\"ja\">{kanji}</h1>")
}

/// Returns the label that opens the reading block for the given locator symbol.
#[must_use]
pub fn readings_label(locator: &str) -> String {
    format!("<dt>{locator}:</dt>")
}

/// Returns the heading above the compound examples for the given locator symbol.
#[must_use]
pub fn compounds_heading(locator: &str) -> String {
    format!("<h2>{locator} reading compounds</h2>")
}
