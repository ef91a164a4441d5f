use super::series::DataPoint;
use serde::Serialize;

const CHART_PADDING: u64 = 100_000;

/// Vertical axis extent for a price chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartBounds {
    pub min: u64,
    pub max: u64,
}

impl ChartBounds {
    /// Pads the observed prices by 100k on both sides. `None` when no point has a price.
    pub fn for_points(points: &[DataPoint]) -> Option<Self> {
        let prices = points.iter().filter_map(DataPoint::price);
        let (min, max) = prices.fold(None, |acc: Option<(u64, u64)>, price| match acc {
            Some((min, max)) => Some((min.min(price), max.max(price))),
            None => Some((price, price)),
        })?;

        Some(Self {
            min: min.saturating_sub(CHART_PADDING),
            max: max + CHART_PADDING,
        })
    }
}

/// Short axis label: `$1.2M` from one million upwards, `$850K` below.
pub fn format_axis_price(value: u64) -> String {
    if value >= 1_000_000 {
        format!("${:.1}M", value as f64 / 1_000_000.0)
    } else {
        format!("${:.0}K", value as f64 / 1000.0)
    }
}

/// Dollar amount with thousands separators.
pub fn format_currency(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}")
}

/// Signed percentage with one decimal, e.g. `+2.3%`.
pub fn format_change(pct: f64) -> String {
    format!("{:+.1}%", pct)
}
