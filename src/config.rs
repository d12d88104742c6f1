use thiserror::Error;

pub const ACCESS_KEY_VAR: &str = "CONTACT_RELAY_ACCESS_KEY";
pub const ENDPOINT_VAR: &str = "CONTACT_RELAY_ENDPOINT";
pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
    #[error("{0} must be an http(s) URL")]
    InvalidEndpoint(&'static str),
}

/// Where contact form submissions are relayed, and the key that authorizes them.
#[derive(Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub access_key: String,
}

impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("endpoint", &self.endpoint)
            .field("access_key", &"<redacted>")
            .finish()
    }
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_key = lookup(ACCESS_KEY_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing(ACCESS_KEY_VAR))?;
        let endpoint = lookup(ENDPOINT_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::InvalidEndpoint(ENDPOINT_VAR));
        }
        Ok(Self {
            endpoint,
            access_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_defaults_endpoint() {
        let cfg = RelayConfig::from_lookup(lookup(&[(ACCESS_KEY_VAR, "abc")])).unwrap();
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.access_key, "abc");
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(
            RelayConfig::from_lookup(lookup(&[(ACCESS_KEY_VAR, "  ")])),
            Err(ConfigError::Missing(ACCESS_KEY_VAR))
        );
    }

    #[test]
    fn test_endpoint_override_and_validation() {
        let cfg = RelayConfig::from_lookup(lookup(&[
            (ACCESS_KEY_VAR, "abc"),
            (ENDPOINT_VAR, "http://localhost:9000/submit"),
        ]))
        .unwrap();
        assert_eq!(cfg.endpoint, "http://localhost:9000/submit");

        assert_eq!(
            RelayConfig::from_lookup(lookup(&[(ACCESS_KEY_VAR, "abc"), (ENDPOINT_VAR, "ftp://x")])),
            Err(ConfigError::InvalidEndpoint(ENDPOINT_VAR))
        );
    }

    #[test]
    fn test_debug_hides_key() {
        let cfg = RelayConfig::from_lookup(lookup(&[(ACCESS_KEY_VAR, "secret")])).unwrap();
        assert!(!format!("{cfg:?}").contains("secret"));
    }
}
