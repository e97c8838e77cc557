//! Plain-text rendering of lookup results.

use std::fmt::{self, Display};

use jisho::phrase::{PhraseEntry, PhraseSearchResponse};
use jisho::{CompoundExample, KanjiRecord};

/// Renders a [`KanjiRecord`] as a short, multi-line summary.
pub struct RecordFormatter<'a>(pub &'a KanjiRecord);

/// Renders the entries of a [`PhraseSearchResponse`], one per line.
pub struct PhraseFormatter<'a>(pub &'a PhraseSearchResponse);

impl Display for RecordFormatter<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        let query = &record.query;

        let Some(details) = &record.details else {
            return writeln!(fmt, "No results for {query}");
        };

        write!(fmt, "{query}")?;
        if let Some(meaning) = &details.meaning {
            write!(fmt, ": {meaning}")?;
        }
        writeln!(fmt)?;

        if let Some(strokes) = details.stroke_count {
            writeln!(fmt, "Strokes: {strokes}")?;
        }
        if let Some(level) = &details.level {
            writeln!(fmt, "Taught in: {level}")?;
        }
        if !details.kunyomi.is_empty() {
            writeln!(fmt, "Kun: {}", details.kunyomi.join("、"))?;
        }
        if !details.onyomi.is_empty() {
            writeln!(fmt, "On: {}", details.onyomi.join("、"))?;
        }
        if let Some(radical) = &details.radical {
            writeln!(fmt, "Radical: {} ({})", radical.symbol, radical.meaning)?;
        }
        if !details.parts.is_empty() {
            writeln!(fmt, "Parts: {}", details.parts.join(" "))?;
        }

        write_examples(fmt, "On reading compounds", &details.onyomi_examples)?;
        write_examples(fmt, "Kun reading compounds", &details.kunyomi_examples)?;

        writeln!(fmt, "Stroke order: {}", record.stroke_order_diagram_uri)
    }
}

fn write_examples(
    fmt: &mut fmt::Formatter<'_>,
    heading: &str,
    examples: &[CompoundExample],
) -> fmt::Result {
    if examples.is_empty() {
        return Ok(());
    }

    writeln!(fmt, "{heading}:")?;
    for CompoundExample {
        example,
        reading,
        meaning,
    } in examples
    {
        writeln!(fmt, "  {example} 【{reading}】 {meaning}")?;
    }

    Ok(())
}

impl Display for PhraseFormatter<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.data.is_empty() {
            return writeln!(fmt, "No results");
        }

        for entry in &self.0.data {
            writeln!(fmt, "{}", EntryFormatter(entry))?;
        }

        Ok(())
    }
}

struct EntryFormatter<'a>(&'a PhraseEntry);

impl Display for EntryFormatter<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = self.0;

        write!(fmt, "{}", entry.headword())?;

        if let Some(reading) = entry
            .japanese
            .first()
            .and_then(|form| form.word.as_ref().and(form.reading.as_ref()))
        {
            write!(fmt, " ({reading})")?;
        }

        let mut labels: Vec<&str> = Vec::new();
        if entry.is_common == Some(true) {
            labels.push("common");
        }
        labels.extend(entry.jlpt.iter().map(String::as_str));
        if !labels.is_empty() {
            write!(fmt, " [{}]", labels.join(", "))?;
        }

        let definitions: Vec<String> = entry
            .senses
            .iter()
            .map(|sense| sense.english_definitions.join(", "))
            .filter(|definition| !definition.is_empty())
            .collect();
        if !definitions.is_empty() {
            write!(fmt, ": {}", definitions.join("; "))?;
        }

        Ok(())
    }
}
