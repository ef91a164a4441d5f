use crate::market::domain::{parse_count, ValidationError};
use chrono::NaiveDate;
use std::env;
use std::fmt;

const DEFAULT_LISTING_COUNT: usize = 10;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub engine: EngineConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let seed = match env::var("ESTATE_SEED") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed)?,
            ),
            Err(_) => None,
        };

        let listing_count = match env::var("ESTATE_LISTING_COUNT") {
            Ok(raw) => parse_count("ESTATE_LISTING_COUNT", &raw)
                .map_err(|source| ConfigError::InvalidListingCount { source })?,
            Err(_) => DEFAULT_LISTING_COUNT,
        };

        let reference_date = match env::var("ESTATE_REFERENCE_DATE") {
            Ok(raw) => Some(
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .map_err(|source| ConfigError::InvalidReferenceDate { value: raw, source })?,
            ),
            Err(_) => None,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            engine: EngineConfig {
                seed,
                listing_count,
                reference_date,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Controls for the synthetic market engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fixed seed for reproducible output; entropy-seeded when absent.
    pub seed: Option<u64>,
    pub listing_count: usize,
    /// Pins the "current" month used for period labels.
    pub reference_date: Option<NaiveDate>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSeed,
    InvalidListingCount {
        source: ValidationError,
    },
    InvalidReferenceDate {
        value: String,
        source: chrono::ParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSeed => write!(f, "ESTATE_SEED must be a valid u64"),
            ConfigError::InvalidListingCount { source } => {
                write!(f, "invalid ESTATE_LISTING_COUNT: {}", source)
            }
            ConfigError::InvalidReferenceDate { value, .. } => {
                write!(f, "ESTATE_REFERENCE_DATE '{}' must be YYYY-MM-DD", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidSeed => None,
            ConfigError::InvalidListingCount { source } => Some(source),
            ConfigError::InvalidReferenceDate { source, .. } => Some(source),
        }
    }
}
