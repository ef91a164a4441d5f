//! Single-property valuation for a user-described home.

use super::domain::{Location, MarketQuery, PropertyCategory, TimeRange, ValidationError};
use super::series::{historical_prices, synthesize};
use super::stats::{change_pct, price_per_area, MarketStats};
use super::valuation::Valuation;
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Window used for the trend figure shown next to an appraisal.
pub const TREND_WINDOW: TimeRange = TimeRange::SixMonths;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyProfile {
    pub location: Location,
    pub category: PropertyCategory,
    pub area: u32,
}

impl PropertyProfile {
    pub fn new(
        location: Location,
        category: PropertyCategory,
        area: u32,
    ) -> Result<Self, ValidationError> {
        if area == 0 {
            return Err(ValidationError::ZeroArea);
        }
        Ok(Self {
            location,
            category,
            area,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketAnalysis {
    pub area_average_price: u64,
    pub price_per_area: u64,
    pub trend_window: TimeRange,
    pub trend_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Appraisal {
    pub profile: PropertyProfile,
    pub valuation: Valuation,
    pub analysis: MarketAnalysis,
}

pub fn appraise<R: Rng + ?Sized>(
    profile: &PropertyProfile,
    reference: NaiveDate,
    rng: &mut R,
) -> Result<Appraisal, ValidationError> {
    if profile.area == 0 {
        return Err(ValidationError::ZeroArea);
    }

    let unit_price = price_per_area(profile.location, profile.category);
    let valuation = Valuation::estimate(unit_price * f64::from(profile.area), rng);

    let query = MarketQuery::new(profile.location, profile.category, TREND_WINDOW);
    let points = synthesize(&query, reference, rng);
    let stats = MarketStats::compute(&points, profile.location, profile.category, rng);
    let history = historical_prices(&points);
    let trend_pct = match (history.first(), history.last()) {
        (Some(&first), Some(&last)) => change_pct(first, last),
        _ => 0.0,
    };

    Ok(Appraisal {
        profile: *profile,
        valuation,
        analysis: MarketAnalysis {
            area_average_price: stats.average_price,
            price_per_area: stats.price_per_area,
            trend_window: TREND_WINDOW,
            trend_pct,
        },
    })
}
