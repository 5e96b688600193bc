use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use posts_client::DEFAULT_ENDPOINT;

#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoint: String,
    pub log_level: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let endpoint = parse_endpoint(std::env::var("POSTS_API_URL").ok())?;
        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_string());
        let connect_timeout_secs = parse_secs(
            "HTTP_CONNECT_TIMEOUT_SECS",
            std::env::var("HTTP_CONNECT_TIMEOUT_SECS").ok(),
            5,
        )?;
        let timeout_secs = parse_secs("HTTP_TIMEOUT_SECS", std::env::var("HTTP_TIMEOUT_SECS").ok(), 15)?;

        Ok(Self {
            endpoint,
            log_level,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Result<Self> {
        if endpoint.is_some() {
            self.endpoint = parse_endpoint(endpoint)?;
        }
        Ok(self)
    }
}

fn parse_endpoint(raw: Option<String>) -> Result<String> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_ENDPOINT.to_string());
    };

    let value = raw.trim();
    if value.is_empty() {
        return Err(anyhow!("endpoint must not be empty"));
    }
    if value.starts_with("http://") || value.starts_with("https://") {
        return Ok(value.to_string());
    }
    Ok(format!("http://{value}"))
}

fn parse_secs(key: &str, raw: Option<String>, default: u64) -> Result<u64> {
    let value = raw
        .unwrap_or_else(|| default.to_string())
        .trim()
        .parse::<u64>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_defaults_to_jsonplaceholder() {
        let endpoint = parse_endpoint(None).expect("default endpoint");
        assert_eq!(endpoint, "https://jsonplaceholder.typicode.com/posts");
    }

    #[test]
    fn endpoint_keeps_scheme() {
        let endpoint = parse_endpoint(Some("https://example.com/posts".to_string()));
        assert_eq!(endpoint.expect("endpoint"), "https://example.com/posts");
    }

    #[test]
    fn endpoint_adds_http_scheme() {
        let endpoint = parse_endpoint(Some(" 127.0.0.1:3000/posts ".to_string()));
        assert_eq!(endpoint.expect("endpoint"), "http://127.0.0.1:3000/posts");
    }

    #[test]
    fn endpoint_rejects_blank() {
        assert!(parse_endpoint(Some("   ".to_string())).is_err());
    }

    #[test]
    fn secs_fall_back_to_default() {
        assert_eq!(parse_secs("X", None, 15).expect("default"), 15);
    }

    #[test]
    fn secs_reject_zero_and_garbage() {
        assert!(parse_secs("X", Some("0".to_string()), 15).is_err());
        assert!(parse_secs("X", Some("soon".to_string()), 15).is_err());
    }

    #[test]
    fn flag_overrides_env_endpoint() {
        let settings = Settings {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            log_level: "warn".to_string(),
            connect_timeout: Duration::from_secs(5),
            timeout: Duration::from_secs(15),
        };
        let settings = settings
            .with_endpoint(Some("localhost:8080/posts".to_string()))
            .expect("override");
        assert_eq!(settings.endpoint, "http://localhost:8080/posts");
    }
}
