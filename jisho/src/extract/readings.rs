use crate::ReadingClass;
use crate::markers::{BLOCK_END, READINGS_LIST_END, READINGS_LIST_START, readings_label};
use crate::scan::{anchor_texts, between};

/// Returns the readings of the given `class` in page order.
///
/// A missing reading block or readings list is not an error; the result is simply empty.
#[must_use]
pub fn readings(html: &str, class: ReadingClass) -> Vec<String> {
    between(html, &readings_label(class.locator()), BLOCK_END)
        .and_then(|block| between(&block, READINGS_LIST_START, READINGS_LIST_END))
        .map(|list| anchor_texts(&list))
        .unwrap_or_default()
}
