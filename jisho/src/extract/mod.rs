//! Field extractors.
//!
//! Each extractor works on the raw page only and does not depend on the output of any other, so
//! they can run in any order.

mod examples;
mod radical;
mod readings;

pub use examples::{compound_examples, decode_fixed_stride};
pub use radical::{parts, radical};
pub use readings::readings;
