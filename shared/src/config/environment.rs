//! Deployment environment and the logging defaults that follow from it

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Variables consulted, in order, to pick the environment
const ENVIRONMENT_VARS: [&str; 3] = ["ENVIRONMENT", "ENV", "RUST_ENV"];

/// Where the service is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }

    /// First parseable value of `ENVIRONMENT`, `ENV` or `RUST_ENV`; development otherwise
    pub fn from_env() -> Self {
        ENVIRONMENT_VARS
            .iter()
            .filter_map(|name| env::var(name).ok())
            .find_map(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// Dotenv file holding overrides for this environment, e.g. `.env.staging`
    pub fn env_file(&self) -> String {
        format!(".env.{}", self.as_str())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let env = match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "staging" | "stage" | "test" => Environment::Staging,
            "production" | "prod" => Environment::Production,
            other => return Err(format!("unknown environment: {}", other)),
        };
        Ok(env)
    }
}

/// Level filter and output format for the tracing subscriber
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `tl_core=debug,warn`
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Verbose pretty output in development, JSON elsewhere
    pub fn for_environment(env: Environment) -> Self {
        let (level, format) = match env {
            Environment::Development => ("debug", LogFormat::Pretty),
            Environment::Staging => ("info", LogFormat::Json),
            Environment::Production => ("warn", LogFormat::Json),
        };
        Self {
            level: level.to_string(),
            format,
        }
    }

    /// Apply `LOG_LEVEL` / `LOG_FORMAT` when set; an unparseable format is ignored
    pub fn with_env_override(mut self) -> Self {
        if let Ok(level) = env::var("LOG_LEVEL") {
            self.level = level;
        }
        if let Some(format) = env::var("LOG_FORMAT").ok().and_then(|f| f.parse().ok()) {
            self.format = format;
        }
        self
    }
}

/// Output format of the fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_aliases() {
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("test".parse::<Environment>().unwrap(), Environment::Staging);
        assert_eq!(" PROD ".parse::<Environment>().unwrap(), Environment::Production);
        assert!("qa".parse::<Environment>().is_err());
    }

    #[test]
    fn test_environment_names_and_env_files() {
        assert_eq!(Environment::default().to_string(), "development");
        assert_eq!(Environment::Development.env_file(), ".env.development");
        assert_eq!(Environment::Staging.env_file(), ".env.staging");
        assert!(Environment::Production.is_production());
        assert!(!Environment::Staging.is_production());
    }

    #[test]
    fn test_logging_defaults_per_environment() {
        let dev = LoggingConfig::for_environment(Environment::Development);
        assert_eq!((dev.level.as_str(), dev.format), ("debug", LogFormat::Pretty));

        let staging = LoggingConfig::for_environment(Environment::Staging);
        assert_eq!((staging.level.as_str(), staging.format), ("info", LogFormat::Json));

        let prod = LoggingConfig::for_environment(Environment::Production);
        assert_eq!((prod.level.as_str(), prod.format), ("warn", LogFormat::Json));
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
