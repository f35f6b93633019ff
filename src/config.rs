//! Command-line configuration
//!
//! Usage:
//!   pokedex                        - Open the lookup window
//!   pokedex --base-url <URL>       - Use another PokéAPI host (mirror, local stub)
//!   pokedex --timeout <SECS>       - Request timeout in seconds
//!   pokedex help                   - Show help

use std::time::Duration;

use reqwest::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: Url,
    pub timeout: Duration,
}

/// What `main` should do after reading the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launch {
    Run(Config),
    Help,
}

impl Config {
    /// Parse arguments, excluding the program name.
    pub fn from_args<I>(args: I) -> Result<Launch, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config {
            base_url: parse_base_url(DEFAULT_BASE_URL)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "help" | "--help" | "-h" => return Ok(Launch::Help),
                "--base-url" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--base-url"))?;
                    config.base_url = parse_base_url(&value)?;
                }
                "--timeout" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--timeout"))?;
                    config.timeout = parse_timeout(&value)?;
                }
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        Ok(Launch::Run(config))
    }

    pub fn help_text() -> &'static str {
        r#"Pokédex - look up a Pokémon by name or number

Usage: pokedex [options]

Options:
  --base-url <URL>   PokéAPI host (default: https://pokeapi.co)
  --timeout <SECS>   Request timeout in seconds (default: 10)
  help               Show this help message

Set RUST_LOG=debug for request logging."#
    }
}

fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: value.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme {}", other))),
    }
    if url.cannot_be_a_base() {
        return Err(invalid("not a base url".to_string()));
    }
    Ok(url)
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Launch, ConfigError> {
        Config::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        match parse(&[]) {
            Ok(Launch::Run(config)) => {
                assert_eq!(config.base_url.as_str(), "https://pokeapi.co/");
                assert_eq!(config.timeout, Duration::from_secs(10));
            }
            other => panic!("Expected Run, got {:?}", other),
        }
    }

    #[test]
    fn test_overrides() {
        match parse(&["--base-url", "http://127.0.0.1:9000", "--timeout", "3"]) {
            Ok(Launch::Run(config)) => {
                assert_eq!(config.base_url.as_str(), "http://127.0.0.1:9000/");
                assert_eq!(config.timeout, Duration::from_secs(3));
            }
            other => panic!("Expected Run, got {:?}", other),
        }
    }

    #[test]
    fn test_help() {
        assert_eq!(parse(&["help"]), Ok(Launch::Help));
        assert_eq!(parse(&["--timeout", "5", "-h"]), Ok(Launch::Help));
    }

    #[test]
    fn test_invalid_timeout() {
        assert_eq!(
            parse(&["--timeout", "0"]),
            Err(ConfigError::InvalidTimeout("0".to_string()))
        );
        assert!(matches!(
            parse(&["--timeout", "soon"]),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            parse(&["--base-url", "pokeapi.co"]),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            parse(&["--base-url", "ftp://pokeapi.co"]),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(
            parse(&["--base-url"]),
            Err(ConfigError::MissingValue("--base-url"))
        );
    }

    #[test]
    fn test_unknown_argument() {
        assert_eq!(
            parse(&["--cache"]),
            Err(ConfigError::UnknownArgument("--cache".to_string()))
        );
    }
}
