//! Simulated user profile configuration.

use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_HOST: &str = "http://localhost:8080";
pub const DEFAULT_MIN_WAIT_MS: u64 = 1;
pub const DEFAULT_MAX_WAIT_MS: u64 = 1000;

pub const HOST_ENV: &str = "LOAD_TEST_HOST";
pub const MIN_WAIT_ENV: &str = "LOAD_TEST_MIN_WAIT_MS";
pub const MAX_WAIT_ENV: &str = "LOAD_TEST_MAX_WAIT_MS";

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Minimum wait {min_ms}ms exceeds maximum wait {max_ms}ms")]
    InvalidWaitBounds { min_ms: u64, max_ms: u64 },
    #[error("Invalid host {host:?}: {reason}")]
    InvalidHost { host: String, reason: String },
    #[error("Invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Host and pacing for one simulated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Base URL every action path is resolved against.
    pub host: String,

    /// Lower bound of the random pause between two actions, in milliseconds.
    pub min_wait_ms: u64,

    /// Upper bound of the random pause between two actions, in milliseconds.
    pub max_wait_ms: u64,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            min_wait_ms: DEFAULT_MIN_WAIT_MS,
            max_wait_ms: DEFAULT_MAX_WAIT_MS,
        }
    }
}

impl UserProfile {
    /// Default profile with any `LOAD_TEST_*` overrides applied, validated.
    pub fn from_env() -> Result<Self, ProfileError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`UserProfile::from_env`] but reads variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ProfileError> {
        let mut profile = Self::default();

        if let Some(host) = lookup(HOST_ENV) {
            profile.host = host.trim().trim_end_matches('/').to_string();
        }
        if let Some(value) = lookup(MIN_WAIT_ENV) {
            profile.min_wait_ms = parse_ms(MIN_WAIT_ENV, &value)?;
        }
        if let Some(value) = lookup(MAX_WAIT_ENV) {
            profile.max_wait_ms = parse_ms(MAX_WAIT_ENV, &value)?;
        }

        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.min_wait_ms > self.max_wait_ms {
            return Err(ProfileError::InvalidWaitBounds {
                min_ms: self.min_wait_ms,
                max_ms: self.max_wait_ms,
            });
        }

        let url = Url::parse(&self.host).map_err(|e| ProfileError::InvalidHost {
            host: self.host.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ProfileError::InvalidHost {
                host: self.host.clone(),
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }
        // Action paths are absolute, so the engine would drop any prefix.
        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            return Err(ProfileError::InvalidHost {
                host: self.host.clone(),
                reason: "host must not carry a path, query or fragment".to_string(),
            });
        }

        Ok(())
    }

    pub fn min_wait(&self) -> Duration {
        Duration::from_millis(self.min_wait_ms)
    }

    pub fn max_wait(&self) -> Duration {
        Duration::from_millis(self.max_wait_ms)
    }
}

fn parse_ms(var: &'static str, value: &str) -> Result<u64, ProfileError> {
    value.trim().parse().map_err(|_| ProfileError::InvalidEnv {
        var,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_default_profile() {
        let profile = UserProfile::default();
        assert_eq!(profile.host, "http://localhost:8080");
        assert_eq!(profile.min_wait(), Duration::from_millis(1));
        assert_eq!(profile.max_wait(), Duration::from_millis(1000));
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_no_overrides_gives_default() {
        let profile = UserProfile::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(profile, UserProfile::default());
    }

    #[test]
    fn test_env_overrides() {
        let profile = UserProfile::from_lookup(lookup_from(&[
            (HOST_ENV, "https://staging.example.com/"),
            (MIN_WAIT_ENV, "50"),
            (MAX_WAIT_ENV, " 200 "),
        ]))
        .unwrap();
        assert_eq!(profile.host, "https://staging.example.com");
        assert_eq!(profile.min_wait_ms, 50);
        assert_eq!(profile.max_wait_ms, 200);
    }

    #[test]
    fn test_inverted_wait_bounds_rejected() {
        let result = UserProfile::from_lookup(lookup_from(&[(MIN_WAIT_ENV, "2000")]));
        assert!(matches!(
            result,
            Err(ProfileError::InvalidWaitBounds {
                min_ms: 2000,
                max_ms: 1000
            })
        ));
    }

    #[test]
    fn test_equal_wait_bounds_allowed() {
        let profile = UserProfile {
            min_wait_ms: 10,
            max_wait_ms: 10,
            ..Default::default()
        };
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_bad_numbers_rejected() {
        let result = UserProfile::from_lookup(lookup_from(&[(MAX_WAIT_ENV, "soon")]));
        assert!(matches!(
            result,
            Err(ProfileError::InvalidEnv { var: MAX_WAIT_ENV, .. })
        ));
    }

    #[test]
    fn test_bad_host_rejected() {
        let result = UserProfile::from_lookup(lookup_from(&[(HOST_ENV, "localhost:8080")]));
        assert!(matches!(result, Err(ProfileError::InvalidHost { .. })));

        let result = UserProfile::from_lookup(lookup_from(&[(HOST_ENV, "not a url")]));
        assert!(matches!(result, Err(ProfileError::InvalidHost { .. })));
    }

    #[test]
    fn test_host_with_path_prefix_rejected() {
        for host in ["http://gw/api", "http://gw/api/", "http://gw/?x=1"] {
            let result = UserProfile::from_lookup(lookup_from(&[(HOST_ENV, host)]));
            assert!(
                matches!(result, Err(ProfileError::InvalidHost { .. })),
                "{host} accepted"
            );
        }

        let profile = UserProfile::from_lookup(lookup_from(&[(HOST_ENV, "http://gw:9000/")]))
            .unwrap();
        assert_eq!(profile.host, "http://gw:9000");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(UserProfile::default()).unwrap();
        assert_eq!(json["host"], "http://localhost:8080");
        assert_eq!(json["min_wait_ms"], 1);
        assert_eq!(json["max_wait_ms"], 1000);
    }
}
