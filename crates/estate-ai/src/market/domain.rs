use super::labels::Granularity;
use super::lookup;
use serde::{Deserialize, Serialize};

/// Expected compounding rate applied to every synthesized period.
pub const GROWTH_TREND: f64 = 0.005;
/// Perturbation amplitude for forecast periods.
pub const FORECAST_VOLATILITY: f64 = 0.005;
/// Forecast points appended after the historical window.
pub const FORECAST_POINTS: usize = 3;
/// Base price for every location without a dedicated entry.
pub const FALLBACK_BASE_PRICE: f64 = 650_000.0;
/// Largest listing batch a single request may ask for.
pub const MAX_LISTING_COUNT: usize = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    SanFrancisco,
    NewYork,
    Austin,
    Seattle,
    LosAngeles,
    Chicago,
    Denver,
    Boston,
    #[default]
    Unlisted,
}

impl Location {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::SanFrancisco,
            Self::NewYork,
            Self::Austin,
            Self::Seattle,
            Self::LosAngeles,
            Self::Chicago,
            Self::Denver,
            Self::Boston,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SanFrancisco => "San Francisco",
            Self::NewYork => "New York",
            Self::Austin => "Austin",
            Self::Seattle => "Seattle",
            Self::LosAngeles => "Los Angeles",
            Self::Chicago => "Chicago",
            Self::Denver => "Denver",
            Self::Boston => "Boston",
            Self::Unlisted => "Other",
        }
    }

    pub const fn base_price(self) -> f64 {
        match self {
            Self::SanFrancisco => 950_000.0,
            Self::NewYork => 850_000.0,
            Self::Austin => 550_000.0,
            Self::Seattle => 750_000.0,
            _ => FALLBACK_BASE_PRICE,
        }
    }

    /// Resolves free text, falling back to [`Location::Unlisted`].
    pub fn parse(raw: &str) -> Self {
        lookup::location_for(raw).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCategory {
    SingleFamily,
    Condo,
    Townhouse,
    MultiFamily,
    #[default]
    AllTypes,
}

impl PropertyCategory {
    /// Concrete categories a listing can carry.
    pub const fn ordered() -> [Self; 4] {
        [
            Self::SingleFamily,
            Self::Condo,
            Self::Townhouse,
            Self::MultiFamily,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SingleFamily => "Single Family",
            Self::Condo => "Condo",
            Self::Townhouse => "Townhouse",
            Self::MultiFamily => "Multi-Family",
            Self::AllTypes => "All Types",
        }
    }

    pub const fn modifier(self) -> f64 {
        match self {
            Self::SingleFamily => 1.2,
            Self::Condo => 0.8,
            Self::Townhouse | Self::MultiFamily | Self::AllTypes => 1.0,
        }
    }

    /// Resolves free text, falling back to [`PropertyCategory::AllTypes`].
    pub fn parse(raw: &str) -> Self {
        lookup::category_for(raw).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    ThreeMonths,
    SixMonths,
    #[default]
    OneYear,
    ThreeYears,
    FiveYears,
}

impl TimeRange {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::ThreeMonths,
            Self::SixMonths,
            Self::OneYear,
            Self::ThreeYears,
            Self::FiveYears,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ThreeMonths => "3 Months",
            Self::SixMonths => "6 Months",
            Self::OneYear => "1 Year",
            Self::ThreeYears => "3 Years",
            Self::FiveYears => "5 Years",
        }
    }

    pub const fn policy(self) -> RangePolicy {
        match self {
            Self::ThreeMonths => RangePolicy::fixed(3, 0.02),
            Self::SixMonths => RangePolicy::fixed(6, 0.03),
            Self::OneYear => RangePolicy::fixed(12, 0.04),
            Self::ThreeYears => RangePolicy::fixed(36, 0.06),
            Self::FiveYears => RangePolicy::fixed(60, 0.08),
        }
    }

    /// Resolves free text, falling back to the one-year window.
    pub fn parse(raw: &str) -> Self {
        lookup::range_for(raw).unwrap_or_default()
    }
}

/// Number of historical periods and the random-walk amplitude for a window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangePolicy {
    point_count: usize,
    volatility: f64,
}

impl RangePolicy {
    const fn fixed(point_count: usize, volatility: f64) -> Self {
        Self {
            point_count,
            volatility,
        }
    }

    pub fn new(point_count: usize, volatility: f64) -> Result<Self, ValidationError> {
        if point_count == 0 {
            return Err(ValidationError::EmptyWindow);
        }
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(ValidationError::InvalidVolatility);
        }
        Ok(Self::fixed(point_count, volatility))
    }

    pub const fn point_count(&self) -> usize {
        self.point_count
    }

    pub const fn volatility(&self) -> f64 {
        self.volatility
    }

    pub fn granularity(&self) -> Granularity {
        Granularity::for_point_count(self.point_count)
    }
}

/// The (location, category, range) tuple a market series is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MarketQuery {
    pub location: Location,
    pub category: PropertyCategory,
    pub range: TimeRange,
}

impl MarketQuery {
    pub const fn new(location: Location, category: PropertyCategory, range: TimeRange) -> Self {
        Self {
            location,
            category,
            range,
        }
    }

    pub fn parse(location: &str, category: &str, range: &str) -> Self {
        Self::new(
            Location::parse(location),
            PropertyCategory::parse(category),
            TimeRange::parse(range),
        )
    }

    pub fn effective_base_price(&self) -> f64 {
        effective_base_price(self.location, self.category)
    }
}

pub fn effective_base_price(location: Location, category: PropertyCategory) -> f64 {
    location.base_price() * category.modifier()
}

/// Rounds to the nearest thousand currency units.
pub fn round_to_thousand(value: f64) -> u64 {
    ((value / 1000.0).round() * 1000.0).max(0.0) as u64
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: i64 },
    #[error("{field} must be a whole number (got '{raw}')")]
    NotAnInteger { field: &'static str, raw: String },
    #[error("a market window needs at least one historical point")]
    EmptyWindow,
    #[error("volatility must be a finite, non-negative fraction")]
    InvalidVolatility,
    #[error("property area must be greater than zero")]
    ZeroArea,
    #[error("{field} must be at most {max} (got {value})")]
    TooMany {
        field: &'static str,
        value: u64,
        max: usize,
    },
}

pub fn validate_count(field: &'static str, value: i64) -> Result<usize, ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative { field, value });
    }
    match usize::try_from(value) {
        Ok(count) => check_limit(field, count),
        Err(_) => Err(ValidationError::TooMany {
            field,
            value: value.unsigned_abs(),
            max: MAX_LISTING_COUNT,
        }),
    }
}

/// Rejects counts above [`MAX_LISTING_COUNT`].
pub fn check_limit(field: &'static str, count: usize) -> Result<usize, ValidationError> {
    if count > MAX_LISTING_COUNT {
        return Err(ValidationError::TooMany {
            field,
            value: count as u64,
            max: MAX_LISTING_COUNT,
        });
    }
    Ok(count)
}

/// Parses a non-negative whole number without applying any upper bound.
pub fn parse_whole(field: &'static str, raw: &str) -> Result<u64, ValidationError> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::NotAnInteger {
            field,
            raw: trimmed.to_string(),
        })?;
    if value < 0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(value.unsigned_abs())
}

pub fn parse_count(field: &'static str, raw: &str) -> Result<usize, ValidationError> {
    let value = parse_whole(field, raw)?;
    match usize::try_from(value) {
        Ok(count) => check_limit(field, count),
        Err(_) => Err(ValidationError::TooMany {
            field,
            value,
            max: MAX_LISTING_COUNT,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_inputs_use_documented_fallbacks() {
        assert_eq!(Location::parse("Paris"), Location::Unlisted);
        assert_eq!(Location::Unlisted.base_price(), FALLBACK_BASE_PRICE);
        assert_eq!(Location::Boston.base_price(), FALLBACK_BASE_PRICE);
        assert_eq!(PropertyCategory::parse("Castle"), PropertyCategory::AllTypes);
        assert_eq!(PropertyCategory::parse("Castle").modifier(), 1.0);
        assert_eq!(TimeRange::parse("10 Years"), TimeRange::OneYear);
    }

    #[test]
    fn austin_condo_effective_base() {
        let query = MarketQuery::parse("Austin", "Condo", "3 Months");
        assert_eq!(query.effective_base_price(), 440_000.0);
        assert_eq!(query.range.policy().point_count(), 3);
        assert_eq!(query.range.policy().volatility(), 0.02);
    }

    #[test]
    fn range_table_matches_window_lengths() {
        let counts: Vec<usize> = TimeRange::ordered()
            .iter()
            .map(|range| range.policy().point_count())
            .collect();
        assert_eq!(counts, vec![3, 6, 12, 36, 60]);
    }

    #[test]
    fn custom_policy_rejects_empty_window() {
        assert_eq!(RangePolicy::new(0, 0.02), Err(ValidationError::EmptyWindow));
        assert_eq!(
            RangePolicy::new(4, f64::NAN),
            Err(ValidationError::InvalidVolatility)
        );
        assert!(RangePolicy::new(1, 0.0).is_ok());
    }

    #[test]
    fn counts_are_validated_at_the_boundary() {
        assert_eq!(parse_count("listing count", " 12 "), Ok(12));
        assert_eq!(parse_count("listing count", "0"), Ok(0));
        assert_eq!(
            parse_count("listing count", "-3"),
            Err(ValidationError::Negative {
                field: "listing count",
                value: -3
            })
        );
        assert!(matches!(
            parse_count("listing count", "2.5"),
            Err(ValidationError::NotAnInteger { .. })
        ));
        assert!(matches!(
            validate_count("point count", -1),
            Err(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn oversized_counts_are_rejected() {
        assert_eq!(parse_count("listing count", "1000"), Ok(MAX_LISTING_COUNT));
        assert_eq!(
            parse_count("listing count", "1152921504606846976"),
            Err(ValidationError::TooMany {
                field: "listing count",
                value: 1_152_921_504_606_846_976,
                max: MAX_LISTING_COUNT
            })
        );
        assert!(matches!(
            validate_count("listing count", i64::MAX),
            Err(ValidationError::TooMany { .. })
        ));
        assert!(matches!(
            check_limit("listing count", usize::MAX),
            Err(ValidationError::TooMany { .. })
        ));
        assert!(matches!(
            parse_count("listing count", "99999999999999999999"),
            Err(ValidationError::NotAnInteger { .. })
        ));
        assert_eq!(parse_whole("area", "250000"), Ok(250_000));
    }

    #[test]
    fn rounding_snaps_to_thousands() {
        assert_eq!(round_to_thousand(440_499.0), 440_000);
        assert_eq!(round_to_thousand(440_500.0), 441_000);
    }
}
