//! Environment configuration for different deployment stages

use std::env;
use std::time::Duration;

use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion};

/// Table used when `TABLE_NAME` is not set
const DEFAULT_TABLE_NAME: &str = "CoffeeShop";

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (uses `LocalStack`)
    Development {
        /// Skip the bearer credential check on catalog routes
        disable_auth: bool,
    },
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => {
                let disable_auth = env::var("DISABLE_AUTH")
                    .map(|val| val.trim().eq_ignore_ascii_case("true"))
                    .unwrap_or(false);

                Self::Development { disable_auth }
            }
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Returns the `DynamoDB` table name backing the catalog
    #[must_use]
    pub fn table_name(&self) -> String {
        env::var("TABLE_NAME").unwrap_or_else(|_| DEFAULT_TABLE_NAME.to_string())
    }

    /// Whether bearer credentials are not required
    ///
    /// Only ever true in development.
    #[must_use]
    pub const fn disable_auth(&self) -> bool {
        matches!(self, Self::Development { disable_auth: true })
    }

    /// Whether logs should be emitted as JSON
    #[must_use]
    pub const fn json_logs(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }

    /// Returns the endpoint URL to use for AWS services
    #[must_use]
    pub const fn override_aws_endpoint_url(&self) -> Option<&str> {
        match self {
            Self::Production | Self::Staging => None,
            Self::Development { .. } => Some("http://localhost:4566"),
        }
    }

    /// AWS configuration with retry and timeout settings
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let retry_config = RetryConfig::standard()
            .with_max_attempts(3)
            .with_initial_backoff(Duration::from_millis(50));

        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(30))
            .build();

        let mut config_builder = aws_config::load_defaults(BehaviorVersion::latest())
            .await
            .to_builder()
            .retry_config(retry_config)
            .timeout_config(timeout_config);

        if let Some(endpoint_url) = self.override_aws_endpoint_url() {
            config_builder = config_builder.endpoint_url(endpoint_url);
        }

        config_builder.build()
    }

    /// Port the HTTP server listens on
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number
    pub fn port(&self) -> Result<u16, std::num::ParseIntError> {
        env::var("PORT").map_or(Ok(8001), |p| p.parse())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_environment_from_env() {
        env::remove_var("APP_ENV");
        env::remove_var("DISABLE_AUTH");
        assert_eq!(
            Environment::from_env(),
            Environment::Development {
                disable_auth: false
            }
        );

        env::set_var("APP_ENV", "Staging ");
        assert_eq!(Environment::from_env(), Environment::Staging);

        env::set_var("APP_ENV", "production");
        assert_eq!(Environment::from_env(), Environment::Production);

        env::remove_var("APP_ENV");
    }

    #[test]
    #[serial]
    #[should_panic(expected = "Invalid environment: invalid")]
    fn test_invalid_environment() {
        env::set_var("APP_ENV", "invalid");
        let _ = Environment::from_env();
    }

    #[test]
    #[serial]
    fn test_disable_auth_only_in_development() {
        env::set_var("APP_ENV", "development");
        env::set_var("DISABLE_AUTH", "true");
        let env = Environment::from_env();
        assert!(env.disable_auth());

        env::set_var("APP_ENV", "production");
        assert!(!Environment::from_env().disable_auth());

        env::remove_var("APP_ENV");
        env::remove_var("DISABLE_AUTH");
    }

    #[test]
    #[serial]
    fn test_table_name_defaults_to_coffee_shop() {
        env::remove_var("TABLE_NAME");
        assert_eq!(Environment::Production.table_name(), "CoffeeShop");

        env::set_var("TABLE_NAME", "CoffeeShop-test");
        assert_eq!(Environment::Production.table_name(), "CoffeeShop-test");

        env::remove_var("TABLE_NAME");
    }

    #[test]
    #[serial]
    fn test_port() {
        env::remove_var("PORT");
        assert_eq!(Environment::Production.port(), Ok(8001));

        env::set_var("PORT", "9000");
        assert_eq!(Environment::Production.port(), Ok(9000));

        env::set_var("PORT", "not-a-port");
        assert!(Environment::Production.port().is_err());

        env::remove_var("PORT");
    }
}
