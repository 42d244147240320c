use crate::error::CheckError;
use std::env;
use std::time::Duration;
use url::Url;

const DEFAULT_HOST: &str = "localhost:2000";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: Url,
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Config, CheckError> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, CheckError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("PARKING_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let base_url = parse_host(&host)?;
        let timeout = match lookup("PARKING_TIMEOUT_SECS") {
            None => None,
            Some(s) => match s.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(CheckError::Config(format!(
                        "PARKING_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
                        s
                    )))
                }
            },
        };
        Ok(Config { base_url, timeout })
    }
}

/// `host` is `host[:port]` only; a scheme, path or query is a mistake that
/// would otherwise still parse into some other URL.
fn parse_host(host: &str) -> Result<Url, CheckError> {
    let invalid = |reason: String| {
        CheckError::Config(format!("Invalid PARKING_HOST '{}': {}", host, reason))
    };
    if host.is_empty() || host.contains('/') {
        return Err(invalid("expected host[:port]".to_string()));
    }
    let url = Url::parse(&format!("http://{}/", host)).map_err(|e| invalid(e.to_string()))?;
    if url.path() != "/"
        || url.query().is_some()
        || url.fragment().is_some()
        || !url.username().is_empty()
        || url.password().is_some()
    {
        return Err(invalid("expected host[:port]".to_string()));
    }
    Ok(url)
}
