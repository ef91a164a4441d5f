use super::domain::{effective_base_price, round_to_thousand, Location, PropertyCategory};
use super::series::{historical_prices, DataPoint};
use rand::Rng;
use serde::Serialize;

const AVERAGE_PREMIUM: f64 = 1.05;
const AREA_DIVISOR: f64 = 2000.0;

/// Summary figures shown next to a market chart.
///
/// `median_price` and `average_price` are derived from the location/category reference
/// price, not from the emitted points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketStats {
    pub median_price: u64,
    pub average_price: u64,
    pub price_per_area: u64,
    pub inventory_count: u32,
    pub days_on_market: u32,
    pub monthly_change_pct: f64,
    pub yearly_change_pct: f64,
}

impl MarketStats {
    pub fn compute<R: Rng + ?Sized>(
        points: &[DataPoint],
        location: Location,
        category: PropertyCategory,
        rng: &mut R,
    ) -> Self {
        let base = effective_base_price(location, category);
        let history = historical_prices(points);

        let (monthly_change_pct, yearly_change_pct) = match (history.first(), history.last()) {
            (Some(&first), Some(&last)) => {
                let previous = if history.len() >= 2 {
                    history[history.len() - 2]
                } else {
                    first
                };
                (change_pct(previous, last), change_pct(first, last))
            }
            _ => (0.0, 0.0),
        };

        Self {
            median_price: round_to_thousand(base),
            average_price: round_to_thousand(base * AVERAGE_PREMIUM),
            price_per_area: price_per_area(location, category).round() as u64,
            inventory_count: rng.gen_range(50..250),
            days_on_market: rng.gen_range(10..70),
            monthly_change_pct,
            yearly_change_pct,
        }
    }
}

/// Reference price per unit of floor area.
pub fn price_per_area(location: Location, category: PropertyCategory) -> f64 {
    effective_base_price(location, category) / AREA_DIVISOR
}

/// Percentage change from `from` to `to`, rounded to one decimal.
pub fn change_pct(from: u64, to: u64) -> f64 {
    if from == 0 {
        return 0.0;
    }
    let ratio = to as f64 / from as f64 - 1.0;
    (ratio * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn history(prices: &[u64]) -> Vec<DataPoint> {
        let mut points: Vec<DataPoint> = prices
            .iter()
            .enumerate()
            .map(|(index, price)| DataPoint::historical(format!("P{index}"), *price))
            .collect();
        points.push(DataPoint::forecast("F0".to_string(), 999_000));
        points
    }

    #[test]
    fn reference_figures_follow_the_lookup_tables() {
        let mut rng = StdRng::seed_from_u64(5);
        let stats = MarketStats::compute(
            &history(&[440_000, 450_000]),
            Location::Austin,
            PropertyCategory::Condo,
            &mut rng,
        );

        assert_eq!(stats.median_price, 440_000);
        assert_eq!(stats.average_price, 462_000);
        assert_eq!(stats.price_per_area, 220);
        assert!((50..250).contains(&stats.inventory_count));
        assert!((10..70).contains(&stats.days_on_market));
    }

    #[test]
    fn change_ratios_ignore_forecast_points() {
        let mut rng = StdRng::seed_from_u64(5);
        let stats = MarketStats::compute(
            &history(&[400_000, 420_000, 442_000]),
            Location::Seattle,
            PropertyCategory::SingleFamily,
            &mut rng,
        );

        assert_eq!(stats.monthly_change_pct, 5.2);
        assert_eq!(stats.yearly_change_pct, 10.5);
    }

    #[test]
    fn single_point_history_has_flat_monthly_change() {
        let mut rng = StdRng::seed_from_u64(5);
        let stats = MarketStats::compute(
            &history(&[500_000]),
            Location::Denver,
            PropertyCategory::AllTypes,
            &mut rng,
        );

        assert_eq!(stats.monthly_change_pct, 0.0);
        assert_eq!(stats.yearly_change_pct, 0.0);
        assert_eq!(stats.median_price, 650_000);
        assert_eq!(stats.average_price, 683_000);
    }

    #[test]
    fn change_pct_rounds_to_one_decimal() {
        assert_eq!(change_pct(300_000, 301_000), 0.3);
        assert_eq!(change_pct(300_000, 290_000), -3.3);
        assert_eq!(change_pct(0, 290_000), 0.0);
    }
}
