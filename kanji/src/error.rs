//! Error types

use miette::Diagnostic;
use thiserror::Error;

/// Application errors for configuration, setup and lookups.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// A configuration source contains invalid values.
    #[error("Could not load configuration")]
    #[diagnostic(
        code(kanji::config),
        help("check the config file and any KANJI_* environment variables")
    )]
    Config(#[source] Box<figment::Error>),
    /// The config file given on the command line does not exist.
    #[error("Config file {path} does not exist")]
    #[diagnostic(code(kanji::config_not_found))]
    ConfigNotFound {
        /// The path that was given.
        path: String,
    },
    /// Failed to create the HTTP client.
    #[error("Could not create HTTP client")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to set up logging or span export.
    #[error("Could not initialize tracing: {0}")]
    Tracing(String),
    /// Looking up a kanji or phrase failed.
    #[error("Lookup failed")]
    #[diagnostic(code(kanji::lookup))]
    Lookup(#[from] jisho::Error),
    /// Failed to render results as JSON.
    #[error("Could not serialize results")]
    Serialize(#[from] serde_json::Error),
}
