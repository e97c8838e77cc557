//! Command-line front-end for looking up kanji and words on jisho.org.

pub mod config;
pub mod consts;
mod error;
pub mod http;
pub mod output;
pub mod telemetry;

pub use config::Config;
pub use error::Error;
