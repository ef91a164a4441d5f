use super::domain::{Location, PropertyCategory};
use super::valuation::Valuation;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

const STATES: [&str; 7] = ["CA", "NY", "TX", "WA", "IL", "CO", "MA"];

const STREET_NAMES: [&str; 10] = [
    "Main St",
    "Oak Ave",
    "Maple Rd",
    "Washington Blvd",
    "Park Lane",
    "Cedar Ln",
    "Sunset Dr",
    "Highland Ave",
    "River Rd",
    "Lake St",
];

pub const FEATURES: [&str; 15] = [
    "Garage",
    "Pool",
    "Garden",
    "Balcony",
    "Fireplace",
    "Central AC",
    "Hardwood Floors",
    "Renovated Kitchen",
    "Walk-in Closets",
    "Smart Home",
    "Mountain View",
    "Ocean View",
    "City View",
    "Waterfront",
    "Gated Community",
];

const PHOTOS: [&str; 6] = [
    "https://images.unsplash.com/photo-1568605114967-8130f3a36994",
    "https://images.unsplash.com/photo-1512917774080-9991f1c4c750",
    "https://images.unsplash.com/photo-1580587771525-78b9dba3b914",
    "https://images.unsplash.com/photo-1564013799919-ab600027ffc6",
    "https://images.unsplash.com/photo-1576941089067-2de3c901e126",
    "https://images.unsplash.com/photo-1600585154340-be6161a56a0c",
];

const PHOTO_CROP: &str = "?ixlib=rb-4.0.3&w=1200&h=800&fit=crop";
const IMAGES_PER_LISTING: usize = 3;

pub const DESCRIPTION: &str = "This beautiful property features an open floor plan, modern finishes, and plenty of natural light. Located in a desirable neighborhood with easy access to shopping, dining, and entertainment.";

/// A synthetic property listing with its valuation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub id: usize,
    pub title: String,
    pub street: String,
    pub city: Location,
    pub state: &'static str,
    pub zip: String,
    pub price: u64,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub area: u32,
    pub lot_size: u32,
    pub year_built: u16,
    pub category: PropertyCategory,
    pub features: Vec<&'static str>,
    pub description: &'static str,
    pub images: Vec<String>,
    pub valuation: Valuation,
}

impl Listing {
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street,
            self.city.label(),
            self.state,
            self.zip
        )
    }

    /// Predicted price relative to the asking price, in percent with one decimal.
    pub fn predicted_difference_pct(&self) -> f64 {
        super::stats::change_pct(self.price, self.valuation.predicted_price)
    }
}

/// Generates `count` independent listings with ids `1..=count`.
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Listing> {
    let listings: Vec<Listing> = (1..=count).map(|id| generate_one(id, rng)).collect();
    debug!(count = listings.len(), "generated listing batch");
    listings
}

fn pick<T: Copy, R: Rng + ?Sized>(pool: &[T], rng: &mut R) -> T {
    pool[rng.gen_range(0..pool.len())]
}

fn generate_one<R: Rng + ?Sized>(id: usize, rng: &mut R) -> Listing {
    let city = pick(&Location::ordered(), rng);
    let state = pick(&STATES, rng);
    let category = pick(&PropertyCategory::ordered(), rng);
    let street_number: u32 = rng.gen_range(1000..10_000);
    let street_name = pick(&STREET_NAMES, rng);
    let zip: u32 = rng.gen_range(10_000..100_000);

    let price: u64 = rng.gen_range(500_000..2_000_000);
    let bedrooms: u8 = rng.gen_range(1..=5);
    let bathrooms: u8 = rng.gen_range(1..=4);
    let area: u32 = rng.gen_range(1000..4000);
    let year_built: u16 = rng.gen_range(1950..2020);

    let features = pick_features(rng);
    let valuation = Valuation::estimate(price as f64, rng);
    let title = listing_title(category, bedrooms, rng);
    let lot_size: u32 = rng.gen_range(5000..15_000);
    let images = (0..IMAGES_PER_LISTING)
        .map(|_| format!("{}{}", pick(&PHOTOS, rng), PHOTO_CROP))
        .collect();

    Listing {
        id,
        title,
        street: format!("{street_number} {street_name}"),
        city,
        state,
        zip: zip.to_string(),
        price,
        bedrooms,
        bathrooms,
        area,
        lot_size,
        year_built,
        category,
        features,
        description: DESCRIPTION,
        images,
        valuation,
    }
}

/// Between two and seven distinct features, in draw order.
fn pick_features<R: Rng + ?Sized>(rng: &mut R) -> Vec<&'static str> {
    let wanted = rng.gen_range(2..=7);
    let mut features = Vec::with_capacity(wanted);
    while features.len() < wanted {
        let feature = pick(&FEATURES, rng);
        if !features.contains(&feature) {
            features.push(feature);
        }
    }
    features
}

fn listing_title<R: Rng + ?Sized>(
    category: PropertyCategory,
    bedrooms: u8,
    rng: &mut R,
) -> String {
    let (first, second, noun) = match category {
        PropertyCategory::SingleFamily => ("Modern", "Spacious", "Home"),
        PropertyCategory::Condo => ("Luxury", "Downtown", "Condo"),
        PropertyCategory::Townhouse => ("Urban", "Elegant", "Townhouse"),
        PropertyCategory::MultiFamily | PropertyCategory::AllTypes => {
            return format!("{bedrooms}-Unit Multi-Family Property");
        }
    };
    let adjective = if rng.gen_bool(0.5) { first } else { second };
    format!("{adjective} {bedrooms}-Bedroom {noun}")
}
