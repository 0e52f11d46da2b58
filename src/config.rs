//! Configuration types.

use crate::error::ConfigError;

/// Server configuration for the onboarding API.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the REST API binds to.
    pub port: u16,
    /// Which onboarding flow this instance serves ("applicant" or "employer").
    pub flow: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            flow: "applicant".to_string(),
        }
    }
}

impl ServerConfig {
    /// Build the configuration from `HORECA_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(port) = std::env::var("HORECA_PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "HORECA_PORT".to_string(),
                message: format!("not a valid port: {port}"),
            })?;
        }
        if let Ok(flow) = std::env::var("HORECA_FLOW") {
            match flow.as_str() {
                "applicant" | "employer" => config.flow = flow,
                other => {
                    return Err(ConfigError::InvalidValue {
                        key: "HORECA_FLOW".to_string(),
                        message: format!("expected \"applicant\" or \"employer\", got {other}"),
                    });
                }
            }
        }
        Ok(config)
    }
}
