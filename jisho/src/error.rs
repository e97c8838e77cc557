use thiserror::Error;

/// Error.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP client could not be built.
    #[cfg(feature = "client")]
    #[error("could not construct http client: {0}")]
    BuildClient(#[source] reqwest::Error),
    /// A request failed or returned an error status.
    #[cfg(feature = "client")]
    #[error("request error: {0}")]
    Request(#[source] reqwest::Error),
    /// The word search response was not the expected JSON.
    #[cfg(feature = "client")]
    #[error("could not deserialize phrase search response: {0}")]
    Deserialize(#[source] reqwest::Error),
    /// A configured base URL cannot be extended with path segments.
    #[error("base url cannot have path segments: {0}")]
    InvalidBaseUrl(String),
    /// The search query was empty.
    #[error("search query is empty")]
    EmptyQuery,
}

/// A located block whose internal layout does not match the expected record shape.
///
/// This is distinct from a missing block: it means the landmarks were found, but the page
/// format no longer matches what the extractors assume.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The block has no non-blank lines.
    #[error("record block is empty")]
    Empty,
    /// The line count is not a multiple of the record length.
    #[error("{lines} lines do not divide into records of {stride} lines")]
    Stride {
        /// Number of non-blank lines in the block.
        lines: usize,
        /// Number of lines per record.
        stride: usize,
    },
    /// A record does not start and end with the list item tokens.
    #[error("record {index} is not delimited by list item tokens")]
    Misaligned {
        /// Zero-based position of the offending record.
        index: usize,
    },
}
