pub mod local;

use crate::core::fetch::DEFAULT_TIMEOUT;
use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_OUTPUT_DIR: &str = "seeds";
pub const DEFAULT_OUTPUT_FILE: &str = "customers.csv";

/// Run configuration, resolved once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub api_url: String,
    pub output_dir: String,
    pub output_file: String,
    pub request_timeout: Duration,
    pub verbose: bool,
    pub log_format: LogFormat,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            verbose: false,
            log_format: LogFormat::Compact,
        }
    }
}

impl SeedConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source. Unset variables take their
    /// defaults; set-but-unparsable ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(raw.trim().parse().map_err(|_| {
                EtlError::InvalidConfigValueError {
                    field: "REQUEST_TIMEOUT_SECS".to_string(),
                    value: raw.clone(),
                    reason: "Expected a whole number of seconds".to_string(),
                }
            })?),
            None => defaults.request_timeout,
        };

        let verbose = match lookup("VERBOSE") {
            Some(raw) => parse_flag("VERBOSE", &raw)?,
            None => defaults.verbose,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") => defaults.log_format,
            Some(raw) if raw.eq_ignore_ascii_case("compact") => LogFormat::Compact,
            Some(raw) if raw.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(raw) => {
                return Err(EtlError::InvalidConfigValueError {
                    field: "LOG_FORMAT".to_string(),
                    value: raw.to_string(),
                    reason: "Expected 'compact' or 'json'".to_string(),
                })
            }
        };

        Ok(Self {
            api_url: lookup("API_URL").unwrap_or(defaults.api_url),
            output_dir: match lookup("OUTPUT_DIR") {
                // An empty directory means the working directory.
                Some(dir) if dir.is_empty() => ".".to_string(),
                Some(dir) => dir,
                None => defaults.output_dir,
            },
            output_file: lookup("OUTPUT_FILE").unwrap_or(defaults.output_file),
            request_timeout,
            verbose,
            log_format,
        })
    }
}

fn parse_flag(field: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(EtlError::InvalidConfigValueError {
            field: field.to_string(),
            value: raw.to_string(),
            reason: "Expected a boolean such as 'true' or '0'".to_string(),
        }),
    }
}

impl ConfigProvider for SeedConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_url
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

impl Validate for SeedConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("API_URL", &self.api_url)?;
        validation::validate_path("OUTPUT_DIR", &self.output_dir)?;
        validation::validate_file_name("OUTPUT_FILE", &self.output_file)?;
        validation::validate_positive_duration("REQUEST_TIMEOUT_SECS", self.request_timeout)?;

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}
