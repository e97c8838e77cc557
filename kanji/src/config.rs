use std::path::Path;
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tracing::trace;
use url::Url;

use crate::{Error, consts};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,
    /// Tracing configuration
    #[serde(default)]
    pub tracing: TracingConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Maximum duration of a single request
    #[serde(default = "default_http_timeout", with = "humantime_serde")]
    pub timeout: Duration,
    /// Value of the `User-Agent` header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Base URL that kanji and sentence searches are appended to
    #[serde(default = "default_search_url")]
    pub search_url: Url,
    /// URL of the word search API
    #[serde(default = "default_phrase_api_url")]
    pub phrase_api_url: Url,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TracingConfig {
    /// Export spans over OTLP
    #[serde(default)]
    pub enabled: bool,
    /// Format of the log lines written to stderr
    #[serde(default)]
    pub format: LogFormat,
    /// Filter directives, used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            timeout: default_http_timeout(),
            user_agent: default_user_agent(),
            search_url: default_search_url(),
            phrase_api_url: default_phrase_api_url(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        TracingConfig {
            enabled: false,
            format: LogFormat::default(),
            filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Returns the layered configuration sources.
    ///
    /// Values are taken from the built-in defaults, then the TOML file at `path` (if it exists),
    /// then `KANJI_`-prefixed environment variables, where `__` separates nested keys (e.g.
    /// `KANJI_HTTP__TIMEOUT=5s`).
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(consts::ENV_PREFIX).split("__"))
    }

    /// Loads the configuration, reading the file at `path` if given or the default config file
    /// if it exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if `path` is given but does not exist, and
    /// [`Error::Config`] if any source contains invalid values.
    pub fn load(path: Option<&Path>) -> Result<Config, Error> {
        let path = match path {
            Some(path) if !path.exists() => {
                return Err(Error::ConfigNotFound {
                    path: path.display().to_string(),
                });
            }
            Some(path) => path,
            None => Path::new(consts::DEFAULT_CONFIG_PATH),
        };

        trace!(?path, "loading config");

        let config = Config::figment(path)
            .extract()
            .map_err(|err| Error::Config(Box::new(err)))?;

        trace!(?config, "loaded config");

        Ok(config)
    }
}

#[must_use]
pub const fn default_http_timeout() -> Duration {
    consts::HTTP_TIMEOUT
}

#[must_use]
pub fn default_user_agent() -> String {
    consts::HTTP_USER_AGENT.to_string()
}

/// # Panics
///
/// Never; the default URL is a valid constant.
#[must_use]
pub fn default_search_url() -> Url {
    Url::parse(jisho::SEARCH_BASE_URL).expect("valid search url")
}

/// # Panics
///
/// Never; the default URL is a valid constant.
#[must_use]
pub fn default_phrase_api_url() -> Url {
    Url::parse(jisho::PHRASE_API_URL).expect("valid phrase api url")
}

#[must_use]
pub fn default_log_filter() -> String {
    consts::DEFAULT_LOG_FILTER.to_string()
}

#[cfg(test)]
mod tests {
    use figment::Jail;
    use rstest::rstest;

    use super::*;

    #[test]
    fn defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let config: Config = Config::figment("missing.toml").extract()?;

            assert_eq!(config, Config::default());
            assert_eq!(config.http.timeout, Duration::from_secs(10));
            assert_eq!(config.tracing.format, LogFormat::Pretty);
            assert_eq!(config.tracing.filter, "kanji=warn,jisho=warn");

            Ok(())
        });
    }

    #[test]
    fn reads_toml_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "kanji.toml",
                r#"
                [http]
                timeout = "2s 500ms"
                search_url = "https://jisho.example.com/search/"

                [tracing]
                format = "json"
                "#,
            )?;

            let config: Config = Config::figment("kanji.toml").extract()?;

            assert_eq!(config.http.timeout, Duration::from_millis(2500));
            assert_eq!(
                config.http.search_url.as_str(),
                "https://jisho.example.com/search/"
            );
            assert_eq!(config.http.user_agent, consts::HTTP_USER_AGENT);
            assert_eq!(config.tracing.format, LogFormat::Json);

            Ok(())
        });
    }

    #[rstest]
    #[case("json", LogFormat::Json)]
    #[case("pretty", LogFormat::Pretty)]
    fn reads_log_format_from_env(#[case] value: &'static str, #[case] expected: LogFormat) {
        Jail::expect_with(|jail| {
            jail.set_env("KANJI_TRACING__FORMAT", value);

            let config: Config = Config::figment("missing.toml").extract()?;

            assert_eq!(config.tracing.format, expected);

            Ok(())
        });
    }

    #[rstest]
    #[case("verbose")]
    #[case("1")]
    fn rejects_unknown_log_format(#[case] value: &'static str) {
        Jail::expect_with(|jail| {
            jail.set_env("KANJI_TRACING__FORMAT", value);

            assert!(Config::figment("missing.toml").extract::<Config>().is_err());

            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("kanji.toml", "[http]\ntimeout = \"30s\"\n")?;
            jail.set_env("KANJI_HTTP__TIMEOUT", "5s");
            jail.set_env("KANJI_TRACING__ENABLED", "true");

            let config: Config = Config::figment("kanji.toml").extract()?;

            assert_eq!(config.http.timeout, Duration::from_secs(5));
            assert!(config.tracing.enabled);

            Ok(())
        });
    }

    #[test]
    fn load_rejects_missing_explicit_path() {
        let result = Config::load(Some(Path::new("/nonexistent/kanji.toml")));

        assert!(matches!(result, Err(Error::ConfigNotFound { .. })));
    }
}
