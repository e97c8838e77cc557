//! Landmark-based extraction of kanji dictionary pages from jisho.org.
//!
//! The pages are not parsed into a DOM. Instead every field is located by fixed literal markers
//! (see [`markers`]) and pulled out of the text between them with the primitives in [`scan`].

// Allow repetition of structure name instead of replacing with self as the output from
// rust-analyzer becomes more readable
#![allow(clippy::use_self)]

#[cfg(feature = "client")]
pub mod client;
mod document;
mod error;
pub mod extract;
pub mod markers;
#[cfg(feature = "serde")]
pub mod phrase;
pub mod scan;
pub mod types;
mod uri;

#[cfg(feature = "client")]
pub use client::Client;
pub use document::{contains_kanji_glyph, parse_kanji_page};
pub use error::{Error, ShapeError};
pub use types::{CompoundExample, KanjiDetails, KanjiRecord, Radical, ReadingClass};
pub use uri::{
    PHRASE_API_URL, SEARCH_BASE_URL, STROKE_ORDER_DIAGRAM_BASE_URL, stroke_order_diagram_uri,
    uri_for_example_search, uri_for_kanji_search,
};
