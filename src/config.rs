use std::env;
use std::fmt;
use std::str::FromStr;

use http::HeaderValue;
use url::Url;

const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com/search";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("NODE_ENV must be set to development, production or test")]
    MissingEnvironment,

    #[error("NODE_ENV must be one of development, production, test (got {0:?})")]
    InvalidEnvironment(String),

    #[error("PORT must be a number (got {0:?})")]
    InvalidPort(String),

    #[error("CORS_ORIGIN is not a valid header value: {0:?}")]
    InvalidCorsOrigin(String),

    #[error("GITHUB_API_URL is not a valid URL: {0}")]
    InvalidGithubUrl(#[from] url::ParseError),
}

/// Deployment environment, read from `NODE_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl Environment {
    /// Error bodies carry full detail everywhere except production.
    pub fn exposes_error_detail(self) -> bool {
        self != Environment::Production
    }

    /// Parse the raw `NODE_ENV` value. Unset is an error, not a default.
    pub fn from_var(value: Option<String>) -> Result<Self, ConfigError> {
        match value {
            Some(v) => v.parse(),
            None => Err(ConfigError::MissingEnvironment),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Test => "test",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            "test" => Ok(Environment::Test),
            other => Err(ConfigError::InvalidEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    pub cors_origin: HeaderValue,
    pub github_api_url: Url,
    pub log_level: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_var(env::var("NODE_ENV").ok())?;

        let port = match env::var("PORT") {
            Ok(v) => v.parse().map_err(|_| ConfigError::InvalidPort(v))?,
            Err(_) => 8081,
        };

        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:8081".into());
        let cors_origin = HeaderValue::from_str(&cors_origin)
            .map_err(|_| ConfigError::InvalidCorsOrigin(cors_origin.clone()))?;

        let github_api_url = Url::parse(
            &env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.into()),
        )?;

        Ok(Self {
            environment,
            host: env::var("HOST").unwrap_or_else(|_| "localhost".into()),
            port,
            cors_origin,
            github_api_url,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Public base URL of this service, used by the landing page and API docs.
    /// Always `localhost` since the bind host may be a wildcard like `0.0.0.0`.
    pub fn public_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}
