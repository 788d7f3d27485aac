use crate::{env_required, ConfigError, FromEnv};
use std::fmt;

/// Shared-secret configuration for bearer-token protected APIs.
#[derive(Clone)]
pub struct AuthConfig {
    pub api_token: String,
}

impl AuthConfig {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("api_token", &"<redacted>")
            .finish()
    }
}

impl FromEnv for AuthConfig {
    /// Requires API_TOKEN to be set to a non-blank value (no default)
    fn from_env() -> Result<Self, ConfigError> {
        let api_token = env_required("API_TOKEN")?;

        if api_token.trim().is_empty() {
            return Err(ConfigError::ParseError {
                key: "API_TOKEN".to_string(),
                details: "token must not be blank".to_string(),
            });
        }

        Ok(Self { api_token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_from_env_success() {
        temp_env::with_var("API_TOKEN", Some("s3cret"), || {
            let config = AuthConfig::from_env().unwrap();
            assert_eq!(config.api_token, "s3cret");
        });
    }

    #[test]
    fn test_auth_config_from_env_missing() {
        temp_env::with_var_unset("API_TOKEN", || {
            let err = AuthConfig::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::MissingEnvVar(ref key) if key == "API_TOKEN"));
        });
    }

    #[test]
    fn test_auth_config_from_env_blank() {
        temp_env::with_var("API_TOKEN", Some("   "), || {
            let err = AuthConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("API_TOKEN"));
        });
    }

    #[test]
    fn test_auth_config_debug_redacts_token() {
        let config = AuthConfig::new("s3cret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("redacted"));
    }
}
