use tracing::warn;

use crate::markers::{
    COMPOUNDS_LIST_END, COMPOUNDS_LIST_START, LIST_ITEM_CLOSE, LIST_ITEM_OPEN, compounds_heading,
};
use crate::scan::{decode_entities, super_trim};
use crate::{CompoundExample, ReadingClass, ShapeError};

/// Number of lines that make up one compound record.
const RECORD_STRIDE: usize = 5;
/// Line offsets of the fields within a record. Offsets 0 and 4 hold the `<li>` and `</li>`
/// delimiters.
const EXAMPLE_OFFSET: usize = 1;
const READING_OFFSET: usize = 2;
const MEANING_OFFSET: usize = 3;

/// Returns the compounds listed under the heading for the given reading `class`.
///
/// The list is laid out with one field per line:
///
/// ```text
/// <li>
/// 日本
/// 【ニホン】
/// Japan
/// </li>
/// ```
///
/// A missing heading or list is not an error and yields an empty list. A record with an empty
/// field is skipped.
///
/// # Errors
///
/// Returns a [`ShapeError`] if the list was found but its lines do not form whole `<li>` records.
pub fn compound_examples(
    html: &str,
    class: ReadingClass,
) -> Result<Vec<CompoundExample>, ShapeError> {
    let heading = compounds_heading(class.locator());
    let Some(start) = html.find(&heading) else {
        return Ok(vec![]);
    };
    let Some(len) = html[start..].find(COMPOUNDS_LIST_END) else {
        return Ok(vec![]);
    };

    let section = html[start..start + len]
        .replacen(&heading, "", 1)
        .replacen(COMPOUNDS_LIST_START, "", 1);
    let lines = record_lines(&section);
    let records = decode_fixed_stride(&lines, RECORD_STRIDE, |index, record| {
        if record[0] != LIST_ITEM_OPEN || record[RECORD_STRIDE - 1] != LIST_ITEM_CLOSE {
            return Err(ShapeError::Misaligned { index });
        }

        Ok(compound_example(record).or_else(|| {
            warn!(?class, index, "skipping compound with missing fields");

            None
        }))
    })?;

    Ok(records.into_iter().flatten().collect())
}

/// Splits `section` into trimmed lines and cuts away everything in front of the first `<li>` line
/// and behind the last `</li>` line.
///
/// Blank lines are kept as empty strings so that the record layout stays intact.
fn record_lines(section: &str) -> Vec<String> {
    let lines: Vec<String> = section.split('\n').map(super_trim).collect();
    let first = lines.iter().position(|line| line == LIST_ITEM_OPEN);
    let last = lines.iter().rposition(|line| line == LIST_ITEM_CLOSE);

    match (first, last) {
        (Some(first), Some(last)) if first <= last => lines[first..=last].to_vec(),
        _ => vec![],
    }
}

fn compound_example(record: &[String]) -> Option<CompoundExample> {
    let example = non_empty(&record[EXAMPLE_OFFSET])?;
    let reading = non_empty(&record[READING_OFFSET])?
        .replacen('【', "", 1)
        .replacen('】', "", 1);
    let meaning = decode_entities(non_empty(&record[MEANING_OFFSET])?).into_owned();

    Some(CompoundExample {
        example: example.to_string(),
        reading,
        meaning,
    })
}

fn non_empty(line: &str) -> Option<&str> {
    (!line.is_empty()).then_some(line)
}

/// Decodes a flat sequence of `lines` as consecutive records of exactly `stride` lines each.
///
/// `decode` receives the index of the record and its lines. The length is validated before any
/// record is decoded, so `decode` always gets exactly `stride` lines.
///
/// # Errors
///
/// Returns [`ShapeError::Empty`] if there are no lines, [`ShapeError::Stride`] if the number of
/// lines is not a multiple of `stride`, or the first error returned by `decode`.
pub fn decode_fixed_stride<'a, T, F>(
    lines: &'a [String],
    stride: usize,
    mut decode: F,
) -> Result<Vec<T>, ShapeError>
where
    F: FnMut(usize, &'a [String]) -> Result<T, ShapeError>,
{
    if lines.is_empty() {
        return Err(ShapeError::Empty);
    }

    if stride == 0 || lines.len() % stride != 0 {
        return Err(ShapeError::Stride {
            lines: lines.len(),
            stride,
        });
    }

    lines
        .chunks_exact(stride)
        .enumerate()
        .map(|(index, record)| decode(index, record))
        .collect()
}
