//! Forward model of the shop's hourly price randomization, plus the two
//! deterministic pricing formulas that bypass it.

use crate::rng::HourlyRng;

/// Percentage window the displayed price may span, relative to the base
/// price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentBand {
    min_percent: f64,
    max_percent: f64,
}

impl PercentBand {
    /// Builds a band with the same defensive clamping the shop applies:
    /// the lower bound never drops below 1% and the upper bound always
    /// clears the lower bound by at least one point.
    pub fn new(min_percent: f64, max_percent: f64) -> Self {
        let min_percent = min_percent.max(1.0);
        let max_percent = max_percent.max(min_percent + 1.0);
        PercentBand {
            min_percent,
            max_percent,
        }
    }

    #[inline]
    pub fn min_percent(&self) -> f64 {
        self.min_percent
    }

    #[inline]
    pub fn max_percent(&self) -> f64 {
        self.max_percent
    }

    fn span(&self) -> f64 {
        self.max_percent - self.min_percent
    }
}

impl Default for PercentBand {
    /// The 90%–110% window the shop runs with.
    fn default() -> Self {
        PercentBand::new(90.0, 110.0)
    }
}

/// Price multiplier drawn for one item in the current window.
///
/// Depends only on subject, item, hour and band — never on the base price —
/// which is what makes the inversion in [`crate::reverse_price`] possible.
pub fn price_multiplier(rng: &HourlyRng, item_id: &str, band: PercentBand) -> f64 {
    let random_percent = band.min_percent() + rng.fraction(item_id) * band.span();
    random_percent / 100.0
}

/// Displayed price for `base_price` in the current window.
///
/// Rounds half away from zero, clamps into
/// `[floor(base * min%), ceil(base * max%)]` and floors the result at 1.
pub fn randomized_price(rng: &HourlyRng, item_id: &str, base_price: i64, band: PercentBand) -> i64 {
    let min_price = (base_price as f64 * band.min_percent() / 100.0).floor() as i64;
    let max_price = (base_price as f64 * band.max_percent() / 100.0).ceil() as i64;

    let raw_price = (base_price as f64 * price_multiplier(rng, item_id, band)).round() as i64;
    raw_price.clamp(min_price, max_price).max(1)
}

/// Shell price of the travel stipend.
///
/// The stipend is never randomized: the shop converts the real-world cost
/// into hours at `units_per_hour`, scales by the golden ratio and by ten,
/// and rounds to the nearest shell. A non-positive rate yields 0.
pub fn stipend_price(usd_cost: f64, units_per_hour: f64) -> i64 {
    if units_per_hour <= 0.0 {
        return 0;
    }

    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let hours = usd_cost / units_per_hour;
    (hours * phi * 10.0).round() as i64
}
