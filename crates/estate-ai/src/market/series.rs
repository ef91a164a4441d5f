use super::domain::{
    round_to_thousand, Location, MarketQuery, PropertyCategory, RangePolicy, TimeRange,
    FORECAST_POINTS, FORECAST_VOLATILITY, GROWTH_TREND,
};
use super::labels;
use super::stats::MarketStats;
use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

/// One chart point. Historical points carry only `actual_price`, forecast points only
/// `predicted_price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataPoint {
    pub label: String,
    pub actual_price: Option<u64>,
    pub predicted_price: Option<u64>,
}

impl DataPoint {
    pub fn historical(label: String, price: u64) -> Self {
        Self {
            label,
            actual_price: Some(price),
            predicted_price: None,
        }
    }

    pub fn forecast(label: String, price: u64) -> Self {
        Self {
            label,
            actual_price: None,
            predicted_price: Some(price),
        }
    }

    pub fn is_forecast(&self) -> bool {
        self.predicted_price.is_some()
    }

    /// Whichever price the point carries.
    pub fn price(&self) -> Option<u64> {
        self.actual_price.or(self.predicted_price)
    }
}

/// Historical prices in chronological order, forecast points excluded.
pub fn historical_prices(points: &[DataPoint]) -> Vec<u64> {
    points.iter().filter_map(|point| point.actual_price).collect()
}

pub fn synthesize<R: Rng + ?Sized>(
    query: &MarketQuery,
    reference: NaiveDate,
    rng: &mut R,
) -> Vec<DataPoint> {
    synthesize_with_policy(
        query.effective_base_price(),
        query.range.policy(),
        reference,
        rng,
    )
}

/// Compounding random walk over the policy window followed by the forecast tail.
///
/// The running price is kept unrounded; only emitted prices snap to thousands.
pub fn synthesize_with_policy<R: Rng + ?Sized>(
    base_price: f64,
    policy: RangePolicy,
    reference: NaiveDate,
    rng: &mut R,
) -> Vec<DataPoint> {
    let point_count = policy.point_count();
    let volatility = policy.volatility();
    let granularity = policy.granularity();

    let mut points = Vec::with_capacity(point_count + FORECAST_POINTS);
    let mut price = base_price;

    for index in 0..point_count {
        let variation = (rng.gen::<f64>() * 2.0 - 1.0) * volatility;
        price *= 1.0 + GROWTH_TREND + variation;
        let label = labels::label(index, point_count, false, granularity, reference);
        points.push(DataPoint::historical(label, round_to_thousand(price)));
    }

    for index in 0..FORECAST_POINTS {
        let variation = rng.gen::<f64>() * (2.0 * FORECAST_VOLATILITY) - FORECAST_VOLATILITY;
        price *= 1.0 + GROWTH_TREND + variation;
        let label = labels::label(index, point_count, true, granularity, reference);
        points.push(DataPoint::forecast(label, round_to_thousand(price)));
    }

    points
}

/// Chart-ready market trend for one query, immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketSeries {
    pub location: Location,
    pub category: PropertyCategory,
    pub range: TimeRange,
    pub reference_date: NaiveDate,
    pub points: Vec<DataPoint>,
    pub stats: MarketStats,
}

impl MarketSeries {
    pub fn generate<R: Rng + ?Sized>(
        query: MarketQuery,
        reference: NaiveDate,
        rng: &mut R,
    ) -> Self {
        let points = synthesize(&query, reference, rng);
        let stats = MarketStats::compute(&points, query.location, query.category, rng);

        Self {
            location: query.location,
            category: query.category,
            range: query.range,
            reference_date: reference,
            points,
            stats,
        }
    }

    pub fn query(&self) -> MarketQuery {
        MarketQuery::new(self.location, self.category, self.range)
    }

    pub fn historical(&self) -> impl Iterator<Item = &DataPoint> {
        self.points.iter().filter(|point| !point.is_forecast())
    }

    pub fn forecast(&self) -> impl Iterator<Item = &DataPoint> {
        self.points.iter().filter(|point| point.is_forecast())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
    }

    #[test]
    fn single_point_window_still_gets_forecast_tail() {
        let mut rng = StdRng::seed_from_u64(3);
        let policy = RangePolicy::new(1, 0.05).expect("valid policy");
        let points = synthesize_with_policy(500_000.0, policy, reference(), &mut rng);

        assert_eq!(points.len(), 1 + FORECAST_POINTS);
        assert_eq!(points[0].label, "May");
        assert!(!points[0].is_forecast());
        assert!(points[1..].iter().all(DataPoint::is_forecast));
    }

    #[test]
    fn zero_volatility_follows_the_growth_trend() {
        let mut rng = StdRng::seed_from_u64(11);
        let policy = RangePolicy::new(2, 0.0).expect("valid policy");
        let points = synthesize_with_policy(1_000_000.0, policy, reference(), &mut rng);

        assert_eq!(points[0].actual_price, Some(1_005_000));
        assert_eq!(points[1].actual_price, Some(1_010_000));
    }

    #[test]
    fn historical_prices_skip_forecast_points() {
        let points = vec![
            DataPoint::historical("Jan".to_string(), 10_000),
            DataPoint::historical("Feb".to_string(), 11_000),
            DataPoint::forecast("Mar".to_string(), 12_000),
        ];
        assert_eq!(historical_prices(&points), vec![10_000, 11_000]);
        assert_eq!(points[2].price(), Some(12_000));
    }
}
