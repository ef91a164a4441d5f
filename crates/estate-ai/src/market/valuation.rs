use rand::Rng;
use serde::Serialize;

const MAX_VARIATION: f64 = 0.1;
const RANGE_BAND: f64 = 0.05;

/// Synthetic price estimate attached to a listing or an appraisal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Valuation {
    pub predicted_price: u64,
    pub confidence: u8,
    pub price_range: (u64, u64),
}

impl Valuation {
    /// Builds the ±5% range around `predicted_price`.
    pub fn new(predicted_price: u64, confidence: u8) -> Self {
        let predicted = predicted_price as f64;
        let low = (predicted * (1.0 - RANGE_BAND)).round() as u64;
        let high = (predicted * (1.0 + RANGE_BAND)).round() as u64;

        Self {
            predicted_price,
            confidence: confidence.clamp(85, 95),
            price_range: (low, high),
        }
    }

    /// Perturbs `reference_price` by up to ±10% and draws a confidence in [85, 95].
    pub fn estimate<R: Rng + ?Sized>(reference_price: f64, rng: &mut R) -> Self {
        let variation = rng.gen::<f64>() * (2.0 * MAX_VARIATION) - MAX_VARIATION;
        let predicted_price = (reference_price * (1.0 + variation)).round().max(0.0) as u64;
        let confidence = rng.gen_range(85..=95);
        Self::new(predicted_price, confidence)
    }

    pub fn low(&self) -> u64 {
        self.price_range.0
    }

    pub fn high(&self) -> u64 {
        self.price_range.1
    }

    pub fn brackets(&self, price: u64) -> bool {
        self.low() <= price && price <= self.high()
    }
}
