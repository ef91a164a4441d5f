pub mod appraisal;
pub mod domain;
mod engine;
pub mod export;
pub mod labels;
pub mod listings;
mod lookup;
pub mod series;
pub mod stats;
pub mod valuation;
pub mod views;

pub use appraisal::{Appraisal, MarketAnalysis, PropertyProfile};
pub use domain::{Location, MarketQuery, PropertyCategory, TimeRange, ValidationError};
pub use engine::MarketEngine;
pub use listings::Listing;
pub use series::{DataPoint, MarketSeries};
pub use stats::MarketStats;
pub use valuation::Valuation;
