//! Types of the word search API.
//!
//! Only the fields that are useful for presenting a result are decoded; everything else in the
//! response is ignored.
use serde::{Deserialize, Serialize};

/// Response of the word search endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PhraseSearchResponse {
    /// Response metadata.
    pub meta: Meta,
    /// Matching entries, best match first.
    #[serde(default)]
    pub data: Vec<PhraseEntry>,
}

/// Response metadata.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Meta {
    /// HTTP-like status code reported by the API.
    pub status: u16,
}

/// A single dictionary entry matching the phrase.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PhraseEntry {
    /// Identifier of the entry, usually the word itself.
    pub slug: String,
    /// Whether the word is considered common.
    pub is_common: Option<bool>,
    /// Source tags, e.g. `wanikani6`.
    pub tags: Vec<String>,
    /// JLPT levels, e.g. `jlpt-n5`.
    pub jlpt: Vec<String>,
    /// Written forms and their readings.
    pub japanese: Vec<JapaneseForm>,
    /// Senses, in order of relevance.
    pub senses: Vec<Sense>,
}

/// A written form of a word.
///
/// Kana-only words have no `word`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct JapaneseForm {
    /// Form written with kanji.
    pub word: Option<String>,
    /// Kana reading.
    pub reading: Option<String>,
}

/// One meaning of a word.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Sense {
    /// English glosses.
    pub english_definitions: Vec<String>,
    /// Parts of speech, e.g. `Noun`.
    pub parts_of_speech: Vec<String>,
    /// Usage tags, e.g. `Usually written using kana alone`.
    pub tags: Vec<String>,
    /// Free-form notes.
    pub info: Vec<String>,
}

impl PhraseEntry {
    /// Returns the primary written form, falling back to the reading and then to the slug.
    #[must_use]
    pub fn headword(&self) -> &str {
        self.japanese
            .first()
            .and_then(|form| form.word.as_deref().or(form.reading.as_deref()))
            .unwrap_or(self.slug.as_str())
    }
}
