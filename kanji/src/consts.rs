use std::time::Duration;

/// The `User-Agent` header to send when issuing HTTP requests.
pub const HTTP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The duration before a HTTP request times out.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// The config file that is read when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "kanji.toml";

/// Prefix of environment variables that override configuration values.
pub const ENV_PREFIX: &str = "KANJI_";

/// Log filter used when neither the config nor `RUST_LOG` specify one.
pub const DEFAULT_LOG_FILTER: &str = "kanji=warn,jisho=warn";
