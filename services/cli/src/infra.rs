use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use estate_ai::config::EngineConfig;
use estate_ai::market::domain::{parse_count, parse_whole};
use estate_ai::market::MarketEngine;

/// Flags shared by every command that drives the engine.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct EngineArgs {
    /// Seed for reproducible output (overrides ESTATE_SEED)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Reference date used as the current month (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Command-line flags win over configuration, configuration wins over the clock.
pub(crate) fn engine_for(config: &EngineConfig, args: &EngineArgs) -> MarketEngine {
    let merged = EngineConfig {
        seed: args.seed.or(config.seed),
        reference_date: args.today.or(config.reference_date),
        ..config.clone()
    };
    MarketEngine::from_config(&merged, Local::now().date_naive())
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_listing_count(raw: &str) -> Result<usize, String> {
    parse_count("listing count", raw).map_err(|err| err.to_string())
}

pub(crate) fn parse_area(raw: &str) -> Result<u32, String> {
    let area = parse_whole("area", raw).map_err(|err| err.to_string())?;
    match u32::try_from(area) {
        Ok(0) => Err("area must be greater than zero".to_string()),
        Ok(area) => Ok(area),
        Err(_) => Err(format!("area {area} is too large")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn flags_override_configuration() {
        let config = EngineConfig {
            seed: Some(1),
            listing_count: 10,
            reference_date: Some(date(2024, 1, 1)),
        };
        let args = EngineArgs {
            seed: Some(2),
            today: Some(date(2025, 5, 5)),
        };
        let engine = engine_for(&config, &args);
        assert_eq!(engine.seed(), Some(2));
        assert_eq!(engine.reference_date(), date(2025, 5, 5));

        let engine = engine_for(&config, &EngineArgs::default());
        assert_eq!(engine.seed(), Some(1));
        assert_eq!(engine.reference_date(), date(2024, 1, 1));
    }

    #[test]
    fn unpinned_engines_use_the_clock() {
        let config = EngineConfig {
            seed: None,
            listing_count: 10,
            reference_date: None,
        };
        let engine = engine_for(&config, &EngineArgs::default());
        assert_eq!(engine.seed(), None);
        assert!(engine.reference_date() <= Local::now().date_naive());
    }

    #[test]
    fn listing_count_rejects_negative_and_fractional_values() {
        assert_eq!(parse_listing_count("4"), Ok(4));
        assert_eq!(
            parse_listing_count("-1"),
            Err("listing count must not be negative (got -1)".to_string())
        );
        assert_eq!(
            parse_listing_count("1.5"),
            Err("listing count must be a whole number (got '1.5')".to_string())
        );
        assert_eq!(
            parse_listing_count("5000"),
            Err("listing count must be at most 1000 (got 5000)".to_string())
        );
    }

    #[test]
    fn area_must_be_positive() {
        assert_eq!(parse_area("1800"), Ok(1800));
        assert_eq!(parse_area("25000"), Ok(25_000));
        assert!(parse_area("0").is_err());
        assert!(parse_area("-20").is_err());
    }

    #[test]
    fn dates_must_be_iso_formatted() {
        assert_eq!(parse_date(" 2025-02-01 "), Ok(date(2025, 2, 1)));
        assert!(parse_date("02/01/2025").is_err());
    }
}
