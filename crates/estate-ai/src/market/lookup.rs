use super::domain::{Location, PropertyCategory, TimeRange};
use std::collections::HashMap;
use std::sync::OnceLock;

static LOCATION_NAMES: OnceLock<HashMap<String, Location>> = OnceLock::new();
static CATEGORY_NAMES: OnceLock<HashMap<String, PropertyCategory>> = OnceLock::new();
static RANGE_NAMES: OnceLock<HashMap<String, TimeRange>> = OnceLock::new();

pub(crate) fn normalize_name(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}

pub(crate) fn location_for(raw: &str) -> Option<Location> {
    location_names().get(&normalize_name(raw)).copied()
}

pub(crate) fn category_for(raw: &str) -> Option<PropertyCategory> {
    category_names().get(&normalize_name(raw)).copied()
}

pub(crate) fn range_for(raw: &str) -> Option<TimeRange> {
    range_names().get(&normalize_name(raw)).copied()
}

fn build<T: Copy>(entries: &[(&str, T)]) -> HashMap<String, T> {
    let mut map = HashMap::with_capacity(entries.len());
    for (name, value) in entries {
        map.insert(normalize_name(name), *value);
    }
    map
}

fn location_names() -> &'static HashMap<String, Location> {
    LOCATION_NAMES.get_or_init(|| {
        const NAME_TO_LOCATION: &[(&str, Location)] = &[
            ("San Francisco", Location::SanFrancisco),
            ("San Francisco, CA", Location::SanFrancisco),
            ("SF", Location::SanFrancisco),
            // valuation form option values
            ("downtown", Location::SanFrancisco),
            ("New York", Location::NewYork),
            ("New York, NY", Location::NewYork),
            ("NYC", Location::NewYork),
            ("suburbs", Location::NewYork),
            ("Austin", Location::Austin),
            ("Austin, TX", Location::Austin),
            ("rural", Location::Austin),
            ("Seattle", Location::Seattle),
            ("Seattle, WA", Location::Seattle),
            ("coastal", Location::Seattle),
            ("Los Angeles", Location::LosAngeles),
            ("Los Angeles, CA", Location::LosAngeles),
            ("LA", Location::LosAngeles),
            ("Chicago", Location::Chicago),
            ("Chicago, IL", Location::Chicago),
            ("Denver", Location::Denver),
            ("Denver, CO", Location::Denver),
            ("Boston", Location::Boston),
            ("Boston, MA", Location::Boston),
        ];
        build(NAME_TO_LOCATION)
    })
}

fn category_names() -> &'static HashMap<String, PropertyCategory> {
    CATEGORY_NAMES.get_or_init(|| {
        const NAME_TO_CATEGORY: &[(&str, PropertyCategory)] = &[
            ("Single Family", PropertyCategory::SingleFamily),
            ("Single Family Home", PropertyCategory::SingleFamily),
            ("Single-Family", PropertyCategory::SingleFamily),
            ("house", PropertyCategory::SingleFamily),
            ("Condo", PropertyCategory::Condo),
            ("Condominium", PropertyCategory::Condo),
            ("Townhouse", PropertyCategory::Townhouse),
            ("Townhome", PropertyCategory::Townhouse),
            ("Multi-Family", PropertyCategory::MultiFamily),
            ("Multi Family", PropertyCategory::MultiFamily),
            ("All Types", PropertyCategory::AllTypes),
        ];
        build(NAME_TO_CATEGORY)
    })
}

fn range_names() -> &'static HashMap<String, TimeRange> {
    RANGE_NAMES.get_or_init(|| {
        const NAME_TO_RANGE: &[(&str, TimeRange)] = &[
            ("3 Months", TimeRange::ThreeMonths),
            ("3mo", TimeRange::ThreeMonths),
            ("6 Months", TimeRange::SixMonths),
            ("6mo", TimeRange::SixMonths),
            ("1 Year", TimeRange::OneYear),
            ("1yr", TimeRange::OneYear),
            ("3 Years", TimeRange::ThreeYears),
            ("3yr", TimeRange::ThreeYears),
            ("5 Years", TimeRange::FiveYears),
            ("5yr", TimeRange::FiveYears),
        ];
        build(NAME_TO_RANGE)
    })
}
