use crate::infra::{engine_for, EngineArgs};
use crate::reports::{
    run_appraisal, run_demo, run_listings, run_market, AppraiseArgs, DemoArgs, ListingsArgs,
    MarketArgs,
};
use clap::{Parser, Subcommand};
use estate_ai::config::AppConfig;
use estate_ai::error::AppError;
use estate_ai::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Estate AI",
    about = "Explore synthetic real estate market trends, listings, and valuations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Chart a market trend with its forecast and summary statistics
    Market(MarketArgs),
    /// Generate synthetic listings with predicted prices
    Listings(ListingsArgs),
    /// Estimate the value of a described property
    Appraise(AppraiseArgs),
    /// Walk through market trends, listings, and an appraisal (default command)
    Demo(DemoArgs),
}

impl Command {
    fn engine_args(&self) -> &EngineArgs {
        match self {
            Command::Market(args) => &args.engine,
            Command::Listings(args) => &args.engine,
            Command::Appraise(args) => &args.engine,
            Command::Demo(args) => &args.engine,
        }
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let engine = engine_for(&config.engine, command.engine_args());
    info!(
        ?config.environment,
        seed = ?engine.seed(),
        reference_date = %engine.reference_date(),
        "estate engine ready"
    );

    let output = match command {
        Command::Market(args) => run_market(&engine, args)?,
        Command::Listings(args) => run_listings(&engine, &config.engine, args)?,
        Command::Appraise(args) => run_appraisal(&engine, args)?,
        Command::Demo(args) => run_demo(&engine, &config.engine, args)?,
    };

    print!("{output}");
    Ok(())
}
