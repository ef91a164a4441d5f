use estate_ai::market::views::{format_axis_price, format_change, format_currency, ChartBounds};
use estate_ai::market::{Appraisal, Listing, MarketSeries};
use std::fmt;

pub(crate) fn render_market(series: &MarketSeries) -> String {
    MarketReport(series).to_string()
}

pub(crate) fn render_listings(listings: &[Listing]) -> String {
    ListingReport(listings).to_string()
}

pub(crate) fn render_appraisal(appraisal: &Appraisal) -> String {
    AppraisalReport(appraisal).to_string()
}

struct MarketReport<'a>(&'a MarketSeries);

impl fmt::Display for MarketReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let series = self.0;
        let query = series.query();
        writeln!(
            f,
            "Market trends: {} / {} over {}",
            query.location.label(),
            query.category.label(),
            query.range.label()
        )?;
        writeln!(f, "Reference month: {}", series.reference_date.format("%B %Y"))?;

        if let Some(bounds) = ChartBounds::for_points(&series.points) {
            writeln!(
                f,
                "Chart range: {} - {}",
                format_axis_price(bounds.min),
                format_axis_price(bounds.max)
            )?;
        }

        writeln!(f, "\n{:<10} {:>14} {:>14}", "Period", "Actual", "Predicted")?;
        for point in &series.points {
            let actual = point.actual_price.map(format_currency).unwrap_or_default();
            let predicted = point.predicted_price.map(format_currency).unwrap_or_default();
            writeln!(f, "{:<10} {:>14} {:>14}", point.label, actual, predicted)?;
        }

        let stats = &series.stats;
        writeln!(f, "\nMarket statistics")?;
        writeln!(
            f,
            "- Median price: {} ({} this month)",
            format_currency(stats.median_price),
            format_change(stats.monthly_change_pct)
        )?;
        writeln!(
            f,
            "- Average price: {} ({} this year)",
            format_currency(stats.average_price),
            format_change(stats.yearly_change_pct)
        )?;
        writeln!(f, "- Price per sq ft: {}", format_currency(stats.price_per_area))?;
        writeln!(f, "- Inventory: {} homes", stats.inventory_count)?;
        writeln!(f, "- Days on market: {}", stats.days_on_market)
    }
}

struct ListingReport<'a>(&'a [Listing]);

impl fmt::Display for ListingReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listings = self.0;
        if listings.is_empty() {
            return writeln!(f, "No listings generated.");
        }

        writeln!(f, "Generated {} listings", listings.len())?;
        for listing in listings {
            writeln!(f, "\n#{} {}", listing.id, listing.title)?;
            writeln!(f, "  {}", listing.full_address())?;
            writeln!(
                f,
                "  {} beds, {} baths, {} sq ft on a {} sq ft lot, built {}",
                listing.bedrooms,
                listing.bathrooms,
                listing.area,
                listing.lot_size,
                listing.year_built
            )?;
            writeln!(
                f,
                "  Asking {}, predicted {} ({}, {}% confidence)",
                format_currency(listing.price),
                format_currency(listing.valuation.predicted_price),
                format_change(listing.predicted_difference_pct()),
                listing.valuation.confidence
            )?;
            writeln!(f, "  Features: {}", listing.features.join(", "))?;
        }
        Ok(())
    }
}

struct AppraisalReport<'a>(&'a Appraisal);

impl fmt::Display for AppraisalReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Appraisal {
            profile,
            valuation,
            analysis,
        } = self.0;

        writeln!(
            f,
            "Valuation for a {} sq ft {} in {}",
            profile.area,
            profile.category.label(),
            profile.location.label()
        )?;
        writeln!(
            f,
            "- Estimated value: {}",
            format_currency(valuation.predicted_price)
        )?;
        writeln!(
            f,
            "- Range: {} - {}",
            format_currency(valuation.low()),
            format_currency(valuation.high())
        )?;
        writeln!(f, "- Confidence: {}%", valuation.confidence)?;
        writeln!(f, "\nMarket analysis")?;
        writeln!(
            f,
            "- Area average: {}",
            format_currency(analysis.area_average_price)
        )?;
        writeln!(
            f,
            "- Price per sq ft: {}",
            format_currency(analysis.price_per_area)
        )?;
        writeln!(
            f,
            "- Trend ({}): {}",
            analysis.trend_window.label(),
            format_change(analysis.trend_pct)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use estate_ai::market::{
        Location, MarketEngine, MarketQuery, PropertyCategory, PropertyProfile, TimeRange,
    };

    fn engine() -> MarketEngine {
        let reference = NaiveDate::from_ymd_opt(2025, 5, 10).expect("valid date");
        MarketEngine::seeded(11, reference)
    }

    #[test]
    fn market_table_lists_every_period() {
        let query = MarketQuery::new(
            Location::Seattle,
            PropertyCategory::Condo,
            TimeRange::ThreeMonths,
        );
        let series = engine().market_series(query);
        let text = render_market(&series);

        assert!(text.starts_with("Market trends: Seattle / Condo over 3 Months"));
        assert!(text.contains("Reference month: May 2025"));
        for point in &series.points {
            assert!(text.contains(&point.label));
        }
        assert!(text.contains(&format_currency(series.stats.median_price)));
        assert!(text.contains("Chart range: $"));
    }

    #[test]
    fn empty_listing_batches_render_a_notice() {
        assert_eq!(render_listings(&[]), "No listings generated.\n");
    }

    #[test]
    fn listing_cards_show_address_and_prediction() {
        let listings = engine().listings(2).expect("small batch");
        let text = render_listings(&listings);
        assert!(text.starts_with("Generated 2 listings"));
        for listing in &listings {
            assert!(text.contains(&listing.full_address()));
            assert!(text.contains(&format_currency(listing.valuation.predicted_price)));
        }
    }

    #[test]
    fn appraisal_shows_range_and_trend() {
        let profile = PropertyProfile::new(Location::Austin, PropertyCategory::Condo, 1500)
            .expect("valid profile");
        let appraisal = engine().appraise(&profile).expect("appraisal succeeds");
        let text = render_appraisal(&appraisal);
        assert!(text.starts_with("Valuation for a 1500 sq ft Condo in Austin"));
        assert!(text.contains("- Area average: $462,000"));
        assert!(text.contains("- Price per sq ft: $220"));
        assert!(text.contains("- Trend (6 Months): "));
    }
}
