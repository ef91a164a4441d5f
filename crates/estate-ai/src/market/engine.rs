use super::appraisal::{appraise, Appraisal, PropertyProfile};
use super::domain::{check_limit, validate_count, MarketQuery, ValidationError};
use super::listings::{self, Listing};
use super::series::MarketSeries;
use crate::config::EngineConfig;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Request/response entry point. Every call draws from a fresh random source, so a
/// seeded engine answers the same request identically and calls never share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketEngine {
    seed: Option<u64>,
    reference_date: NaiveDate,
}

impl MarketEngine {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            seed: None,
            reference_date,
        }
    }

    pub fn seeded(seed: u64, reference_date: NaiveDate) -> Self {
        Self {
            seed: Some(seed),
            reference_date,
        }
    }

    /// Uses the configured seed and reference date, falling back to `today`.
    pub fn from_config(config: &EngineConfig, today: NaiveDate) -> Self {
        Self {
            seed: config.seed,
            reference_date: config.reference_date.unwrap_or(today),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn market_series(&self, query: MarketQuery) -> MarketSeries {
        let mut rng = self.rng();
        let series = MarketSeries::generate(query, self.reference_date, &mut rng);
        debug!(
            location = query.location.label(),
            category = query.category.label(),
            range = query.range.label(),
            points = series.points.len(),
            "synthesized market series"
        );
        series
    }

    pub fn listings(&self, count: usize) -> Result<Vec<Listing>, ValidationError> {
        let count = check_limit("listing count", count)?;
        let mut rng = self.rng();
        Ok(listings::generate(count, &mut rng))
    }

    /// Validates an untrusted listing count before generating.
    pub fn listings_for_request(&self, requested: i64) -> Result<Vec<Listing>, ValidationError> {
        let count = validate_count("listing count", requested)?;
        self.listings(count)
    }

    pub fn appraise(&self, profile: &PropertyProfile) -> Result<Appraisal, ValidationError> {
        let mut rng = self.rng();
        let appraisal = appraise(profile, self.reference_date, &mut rng)?;
        debug!(
            location = profile.location.label(),
            area = profile.area,
            predicted_price = appraisal.valuation.predicted_price,
            "appraised property"
        );
        Ok(appraisal)
    }
}
