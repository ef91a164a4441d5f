use crate::infra::{parse_area, parse_listing_count, EngineArgs, OutputFormat};
use crate::render::{render_appraisal, render_listings, render_market};
use clap::Args;
use estate_ai::config::EngineConfig;
use estate_ai::error::AppError;
use estate_ai::market::export::write_series_csv;
use estate_ai::market::{Location, MarketEngine, MarketQuery, PropertyCategory, PropertyProfile};
use tracing::warn;

#[derive(Args, Debug)]
pub(crate) struct MarketArgs {
    /// City to chart; unknown names use the national fallback price
    #[arg(long, default_value = "San Francisco")]
    pub(crate) location: String,
    /// Property type (Single Family, Condo, Townhouse, Multi-Family, All Types)
    #[arg(long, default_value = "All Types")]
    pub(crate) category: String,
    /// Time window (3 Months, 6 Months, 1 Year, 3 Years, 5 Years)
    #[arg(long, default_value = "1 Year")]
    pub(crate) range: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    #[command(flatten)]
    pub(crate) engine: EngineArgs,
}

#[derive(Args, Debug)]
pub(crate) struct ListingsArgs {
    /// Number of listings (defaults to ESTATE_LISTING_COUNT)
    #[arg(long, allow_hyphen_values = true, value_parser = parse_listing_count)]
    pub(crate) count: Option<usize>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    #[command(flatten)]
    pub(crate) engine: EngineArgs,
}

#[derive(Args, Debug)]
pub(crate) struct AppraiseArgs {
    #[arg(long, default_value = "San Francisco")]
    pub(crate) location: String,
    #[arg(long, default_value = "Single Family")]
    pub(crate) category: String,
    /// Living area in square feet
    #[arg(long, allow_hyphen_values = true, value_parser = parse_area)]
    pub(crate) area: u32,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    #[command(flatten)]
    pub(crate) engine: EngineArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the listing portion of the demo.
    #[arg(long)]
    pub(crate) skip_listings: bool,
    /// Skip the appraisal portion of the demo.
    #[arg(long)]
    pub(crate) skip_appraisal: bool,
    #[command(flatten)]
    pub(crate) engine: EngineArgs,
}

const DEMO_PROFILE_AREA: u32 = 2_000;

pub(crate) fn run_market(engine: &MarketEngine, args: MarketArgs) -> Result<String, AppError> {
    let query = resolve_query(&args.location, &args.category, &args.range);
    let series = engine.market_series(query);

    match args.format {
        OutputFormat::Text => Ok(render_market(&series)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&series)?)),
        OutputFormat::Csv => {
            let mut buffer = Vec::new();
            write_series_csv(&series.points, &mut buffer)?;
            Ok(String::from_utf8_lossy(&buffer).into_owned())
        }
    }
}

pub(crate) fn run_listings(
    engine: &MarketEngine,
    config: &EngineConfig,
    args: ListingsArgs,
) -> Result<String, AppError> {
    let count = args.count.unwrap_or(config.listing_count);
    let listings = engine.listings(count)?;

    match args.format {
        OutputFormat::Text => Ok(render_listings(&listings)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&listings)?)),
        OutputFormat::Csv => {
            warn!("csv output is only available for market series; using json");
            Ok(format!("{}\n", serde_json::to_string_pretty(&listings)?))
        }
    }
}

pub(crate) fn run_appraisal(engine: &MarketEngine, args: AppraiseArgs) -> Result<String, AppError> {
    let profile = PropertyProfile::new(
        Location::parse(&args.location),
        PropertyCategory::parse(&args.category),
        args.area,
    )?;
    let appraisal = engine.appraise(&profile)?;

    match args.format {
        OutputFormat::Text => Ok(render_appraisal(&appraisal)),
        OutputFormat::Json | OutputFormat::Csv => {
            Ok(format!("{}\n", serde_json::to_string_pretty(&appraisal)?))
        }
    }
}

pub(crate) fn run_demo(
    engine: &MarketEngine,
    config: &EngineConfig,
    args: DemoArgs,
) -> Result<String, AppError> {
    let mut output = String::from("Estate AI demo\n\n");
    output.push_str(&render_market(&engine.market_series(MarketQuery::default())));

    if !args.skip_listings {
        output.push('\n');
        output.push_str(&render_listings(&engine.listings(config.listing_count)?));
    }

    if !args.skip_appraisal {
        let profile = PropertyProfile::new(
            Location::SanFrancisco,
            PropertyCategory::SingleFamily,
            DEMO_PROFILE_AREA,
        )?;
        output.push('\n');
        output.push_str(&render_appraisal(&engine.appraise(&profile)?));
    }

    Ok(output)
}

fn resolve_query(location: &str, category: &str, range: &str) -> MarketQuery {
    let query = MarketQuery::parse(location, category, range);
    if query.location == Location::Unlisted {
        warn!(location, "unrecognized location, using fallback base price");
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use estate_ai::market::TimeRange;

    fn engine() -> MarketEngine {
        let reference = NaiveDate::from_ymd_opt(2025, 5, 10).expect("valid date");
        MarketEngine::seeded(5, reference)
    }

    fn config() -> EngineConfig {
        EngineConfig {
            seed: Some(5),
            listing_count: 3,
            reference_date: None,
        }
    }

    fn market_args(format: OutputFormat) -> MarketArgs {
        MarketArgs {
            location: "Austin".to_string(),
            category: "Condo".to_string(),
            range: "6 Months".to_string(),
            format,
            engine: EngineArgs::default(),
        }
    }

    #[test]
    fn market_csv_has_one_row_per_point() {
        let output = run_market(&engine(), market_args(OutputFormat::Csv)).expect("csv export");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "label,actual_price,predicted_price");
        assert_eq!(lines.len(), 1 + 6 + 3);
        assert!(lines[1..=6].iter().all(|row| row.ends_with(',')));
        assert!(lines[7..].iter().all(|row| row.contains(",,")));
    }

    #[test]
    fn market_json_matches_engine_output() {
        let output = run_market(&engine(), market_args(OutputFormat::Json)).expect("json export");
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("valid json");
        let expected = serde_json::to_value(engine().market_series(MarketQuery::new(
            Location::Austin,
            PropertyCategory::Condo,
            TimeRange::SixMonths,
        )))
        .expect("series serializes");
        assert_eq!(parsed, expected);
        assert_eq!(parsed["location"], "austin");
    }

    #[test]
    fn listings_fall_back_to_configured_count() {
        let args = ListingsArgs {
            count: None,
            format: OutputFormat::Json,
            engine: EngineArgs::default(),
        };
        let output = run_listings(&engine(), &config(), args).expect("listings render");
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&output).expect("valid json");
        assert_eq!(parsed.len(), 3);

        let args = ListingsArgs {
            count: Some(0),
            format: OutputFormat::Text,
            engine: EngineArgs::default(),
        };
        let output = run_listings(&engine(), &config(), args).expect("listings render");
        assert_eq!(output, "No listings generated.\n");
    }

    #[test]
    fn appraisal_rejects_zero_area() {
        let args = AppraiseArgs {
            location: "Seattle".to_string(),
            category: "Townhouse".to_string(),
            area: 0,
            format: OutputFormat::Text,
            engine: EngineArgs::default(),
        };
        let err = run_appraisal(&engine(), args).expect_err("zero area rejected");
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn demo_can_skip_sections() {
        let full = run_demo(&engine(), &config(), DemoArgs::default()).expect("demo runs");
        assert!(full.starts_with("Estate AI demo"));
        assert!(full.contains("Generated 3 listings"));
        assert!(full.contains("Valuation for a 2000 sq ft Single Family in San Francisco"));

        let args = DemoArgs {
            skip_listings: true,
            skip_appraisal: true,
            engine: EngineArgs::default(),
        };
        let short = run_demo(&engine(), &config(), args).expect("demo runs");
        assert!(short.contains("Market trends: San Francisco / All Types over 1 Year"));
        assert!(!short.contains("listings"));
        assert!(!short.contains("Valuation for"));
    }
}
